//! Canned answers for the FAQ assistant

const TRADE_COMPLIANCE: &str = "The firm's expertise includes navigating post-Brexit trade \
compliance. A publication from Oct 2025 outlines the new documentation and tariff requirements \
for UK exports.";

const DISPUTE_RESOLUTION: &str = "Based on case studies, complex cross-border disputes are often \
resolved via mediation under SIAC rules, a method detailed in the firm's dispute resolution \
strategy.";

const CONTRACT_DRAFTING: &str = "Master Distributor Agreements require careful review of \
exclusive distribution clauses and automatic renewal terms, as highlighted in a recent document \
analysis on the EU market.";

pub const FALLBACK_ANSWER: &str = "I apologize, but I cannot provide a definitive answer based on \
the indexed knowledge base. Please book a consultation for specific legal advice.";

/// Topics in priority order; the first topic with a matching keyword wins
const TOPICS: &[(&[&str], &str)] = &[
    (&["trade", "export"], TRADE_COMPLIANCE),
    (&["dispute", "mediation"], DISPUTE_RESOLUTION),
    (&["contract", "renewal"], CONTRACT_DRAFTING),
];

/// Case-insensitive substring match of `query` against the topic keywords
pub fn answer_for(query: &str) -> &'static str {
    let query = query.to_lowercase();

    TOPICS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| query.contains(keyword)))
        .map(|(_, answer)| *answer)
        .unwrap_or(FALLBACK_ANSWER)
}
