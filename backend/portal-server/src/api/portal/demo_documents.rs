use crate::DocumentMetadata;

use chrono::{DateTime, Duration, Utc};

pub const STATUS_NEW: &str = "New";
pub const STATUS_REVIEWED: &str = "Reviewed";

/// Demo documents owned by `owner`, dated relative to `now`
pub fn demo_documents(owner: &str, now: DateTime<Utc>) -> Vec<DocumentMetadata> {
    vec![
        DocumentMetadata {
            id: "doc1".into(),
            filename: "Master Distributor Agreement (EU).pdf".into(),
            uploaded_by: owner.into(),
            upload_date: now - Duration::days(5),
            status: STATUS_REVIEWED.into(),
            llm_summary: Some(
                "LLM Summary: The document outlines exclusive distribution clauses for the EU \
                 market. Key finding: No automatic renewal clause is present."
                    .into(),
            ),
            cloud_path: "s3://path/doc1.pdf".into(),
        },
        DocumentMetadata {
            id: "doc2".into(),
            filename: "Draft Arbitration Notice - Project Beta.docx".into(),
            uploaded_by: owner.into(),
            upload_date: now - Duration::days(2),
            status: STATUS_NEW.into(),
            llm_summary: Some(
                "LLM Summary: A preliminary review suggests that the case is best suited for \
                 mediation under SIAC rules. Further document gathering on correspondence history \
                 is needed."
                    .into(),
            ),
            cloud_path: "s3://path/doc2.docx".into(),
        },
    ]
}
