//! Canned and generated fixtures for scenarios.
//!
//! Generated records embed a timestamp plus a process-wide counter in the
//! email, so repeated runs against the same site never collide.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;

use crate::text_box::UserData;
use crate::web_table::RegistrationForm;

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn unique_tag() -> String {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}-{n}", Local::now().format("%H%M%S"))
}

/// The standard registration record for happy-path scenarios.
pub fn john_doe() -> RegistrationForm {
    RegistrationForm {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        age: "30".to_string(),
        salary: "50000".to_string(),
        department: "QA".to_string(),
    }
}

/// A second canned record, distinct from [`john_doe`] in every field.
pub fn jane_roe() -> RegistrationForm {
    RegistrationForm {
        first_name: "Jane".to_string(),
        last_name: "Roe".to_string(),
        email: "jane.roe@example.com".to_string(),
        age: "41".to_string(),
        salary: "72000".to_string(),
        department: "Legal".to_string(),
    }
}

/// A registration record with a unique email, safe to add repeatedly.
pub fn unique_registration(first_name: &str, last_name: &str) -> RegistrationForm {
    let tag = unique_tag();
    RegistrationForm {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}.{tag}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        age: "30".to_string(),
        salary: "50000".to_string(),
        department: "QA".to_string(),
    }
}

/// A batch of unique registration records.
pub fn unique_batch(count: usize) -> Vec<RegistrationForm> {
    (0..count)
        .map(|i| unique_registration(&format!("User{i}"), "Batch"))
        .collect()
}

/// Copy of a form with its email replaced by a unique one, so canned records
/// stay addressable by email when added repeatedly.
pub fn with_unique_email(mut form: RegistrationForm) -> RegistrationForm {
    form.email = format!("record.{}@example.com", unique_tag());
    form
}

/// A record whose name fields carry accents and punctuation the grid must
/// render verbatim.
pub fn special_characters() -> RegistrationForm {
    RegistrationForm {
        first_name: "Zoë".to_string(),
        last_name: "O'Brien-Smith".to_string(),
        email: "zoe.obrien@example.com".to_string(),
        age: "28".to_string(),
        salary: "61000".to_string(),
        department: "R&D".to_string(),
    }
}

/// A record at the long end of what the form accepts (the inputs cap their
/// fields at 25 characters).
pub fn long_values() -> RegistrationForm {
    RegistrationForm {
        first_name: "Maximiliana-Alexandra".to_string(),
        last_name: "Featherstonehaugh".to_string(),
        email: "maximiliana.f@example.com".to_string(),
        age: "99".to_string(),
        salary: "9999999".to_string(),
        department: "Quality Engineering".to_string(),
    }
}

/// The standard Text Box submission.
pub fn text_box_user() -> UserData {
    UserData {
        full_name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        current_address: "12 High Street".to_string(),
        permanent_address: "34 Low Street".to_string(),
    }
}

/// Emails the Text Box form must accept.
pub fn valid_emails() -> Vec<&'static str> {
    vec![
        "plain@example.com",
        "dotted.name@example.com",
        "tagged+qa@example.co.uk",
    ]
}

/// Emails the Text Box form must reject.
pub fn invalid_emails() -> Vec<&'static str> {
    vec!["not-an-email", "missing-at.example.com", "trailing@", "@leading.com"]
}
