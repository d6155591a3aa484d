use derive_more::Display;
use validator::validate_email;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", _0)]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if validate_email(&value) && is_deliverable_shape(&value) {
            Ok(Self(value))
        } else {
            Err("invalid email".into())
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Tightens `validate_email` to plain internet addresses: no quoted or exotic
/// local parts, no IP literals, and a dotted domain ending in an alphabetic
/// top-level domain of at least two letters.
fn is_deliverable_shape(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };

    let local_allowed = |c: char| c.is_ascii_alphanumeric() || "_'+-.".contains(c);
    let local_is_valid = !local.is_empty()
        && local.chars().all(local_allowed)
        && !local.starts_with('.')
        && !local.ends_with(['.', '\''])
        && !local.contains("..");

    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };
    let hosts_are_valid = !hosts.is_empty()
        && hosts.iter().all(|label| {
            label.starts_with(|c: char| c.is_ascii_alphanumeric())
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });
    let tld_is_valid = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    local_is_valid && hosts_are_valid && tld_is_valid
}
