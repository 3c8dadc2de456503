#![no_main]
use cyber_maturity::catalog::Catalogs;
use cyber_maturity::engine::AssessmentEngine;
use cyber_maturity::session::{AnswerValidation, SessionRecord};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn catalogs() -> &'static Catalogs {
    static CATALOGS: OnceLock<Catalogs> = OnceLock::new();
    CATALOGS.get_or_init(Catalogs::builtin)
}

/// Fuzz session import in both validation modes.
///
/// Any record that imports must also assess without panicking, since
/// accepted answers are guaranteed to be in range.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let catalogs = catalogs();
    for mode in [AnswerValidation::Strict, AnswerValidation::Lenient] {
        if let Ok(record) = SessionRecord::from_json(s, &catalogs.questions, mode) {
            let engine = AssessmentEngine::new(catalogs);
            let assessment = engine.assess(&record.answers, &record.client_info);
            assert!(assessment.maturity <= 100);
        }
    }
});
