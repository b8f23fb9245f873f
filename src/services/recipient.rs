use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::delivery::RecipientPartition;

static ADDRESS_REGEX: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^(?P<local>[a-zA-Z0-9._%+-]+)@(?P<domain>[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})$").ok()
});

// RFC 5321 path limit
const MAX_ADDRESS_LENGTH: usize = 254;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
}

/// Static recipient policy: address syntax plus a domain allow-list.
/// No DNS or mailbox lookups are made.
#[derive(Debug, Clone)]
pub struct RecipientPolicy {
    allowed_domains: HashSet<String>,
}

impl RecipientPolicy {
    pub fn new<I, S>(allowed_domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        RecipientPolicy {
            allowed_domains: allowed_domains
                .into_iter()
                .map(|domain| domain.as_ref().trim().to_ascii_lowercase())
                .filter(|domain| !domain.is_empty())
                .collect(),
        }
    }

    pub fn classify(&self, address: &str) -> Verdict {
        if address.len() > MAX_ADDRESS_LENGTH {
            return Verdict::Invalid;
        }

        let Some(captures) = ADDRESS_REGEX
            .as_ref()
            .and_then(|regex| regex.captures(address))
        else {
            return Verdict::Invalid;
        };

        match captures.name("domain") {
            Some(domain) if self.allows(domain.as_str()) => Verdict::Valid,
            _ => Verdict::Invalid,
        }
    }

    /// Splits `addresses` into valid and invalid sets, keeping input order in each.
    pub fn partition(&self, addresses: &[String]) -> RecipientPartition {
        let mut partition = RecipientPartition::default();

        for address in addresses {
            match self.classify(address) {
                Verdict::Valid => partition.valid.push(address.clone()),
                Verdict::Invalid => {
                    tracing::warn!(recipient = %address, "rejected recipient address");
                    partition.invalid.push(address.clone())
                }
            }
        }

        partition
    }

    fn allows(&self, domain: &str) -> bool {
        self.allowed_domains.contains(&domain.to_ascii_lowercase())
    }
}
