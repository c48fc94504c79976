use crate::{FALLBACK_ANSWER, answer_for};

use googletest::assert_that;
use googletest::prelude::{contains_substring, eq};

#[test]
fn given_trade_keyword_when_answered_then_trade_topic() {
    assert_that!(answer_for("What about EXPORT licences?"), contains_substring("trade compliance"));
}

#[test]
fn given_mediation_keyword_when_answered_then_dispute_topic() {
    assert_that!(answer_for("is mediation an option"), contains_substring("SIAC"));
}

#[test]
fn given_renewal_keyword_when_answered_then_contract_topic() {
    assert_that!(
        answer_for("auto renewal clauses"),
        contains_substring("Master Distributor Agreements")
    );
}

#[test]
fn given_several_topics_when_answered_then_first_topic_wins() {
    assert_that!(
        answer_for("a contract dispute over exports"),
        contains_substring("trade compliance")
    );
}

#[test]
fn given_no_keyword_when_answered_then_fallback() {
    assert_that!(answer_for("Can you help with my divorce?"), eq(FALLBACK_ANSWER));
    assert_that!(answer_for(""), eq(FALLBACK_ANSWER));
}
