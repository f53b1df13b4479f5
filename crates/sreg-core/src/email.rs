//! # Standards-Grade Email Check
//!
//! Server-side address validation, stricter than the browser pattern.
//! Accepts RFC 5321/5322 dot-atom addresses on a DNS host name:
//!
//! - at most 254 octets in total, exactly one `@`;
//! - local part 1–64 octets of atext, dots only between atoms;
//! - domain at most 253 octets, at least two labels, each label 1–63
//!   alphanumerics or hyphens without a leading or trailing hyphen;
//! - the top-level label is not all digits.
//!
//! Quoted local parts and address literals (`user@[192.0.2.1]`) are
//! rejected.

use std::sync::OnceLock;

use regex::Regex;

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 253;

fn local_part_pattern() -> &'static Regex {
    static LOCAL: OnceLock<Regex> = OnceLock::new();
    LOCAL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
            .expect("local part pattern is a valid regex")
    })
}

fn label_pattern() -> &'static Regex {
    static LABEL: OnceLock<Regex> = OnceLock::new();
    LABEL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$")
            .expect("domain label pattern is a valid regex")
    })
}

/// Returns `true` if `address` is a deliverable-shaped email address.
pub fn is_standard_email(address: &str) -> bool {
    if address.is_empty() || address.len() > MAX_ADDRESS_LEN {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }
    is_local_part(local) && is_domain(domain)
}

fn is_local_part(local: &str) -> bool {
    !local.is_empty() && local.len() <= MAX_LOCAL_LEN && local_part_pattern().is_match(local)
}

/// DNS host name with at least two labels and a non-numeric TLD.
fn is_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|l| label_pattern().is_match(l)) {
        return false;
    }
    labels
        .last()
        .is_some_and(|tld| !tld.bytes().all(|b| b.is_ascii_digit()))
}
