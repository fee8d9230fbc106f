use serde::{Deserialize, Serialize};

/// Contact details collected by the wizard. Email, first and last name are
/// required to reach the review step; the remaining fields are optional
/// client-side but expected by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl ContactInfo {
    pub fn has_required_fields(&self) -> bool {
        !self.first_name.trim().is_empty()
            && !self.last_name.trim().is_empty()
            && is_valid_email(self.email.trim())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() {
        return false;
    }
    let re = regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    );
    re.unwrap().is_match(email)
}

/// Customer block of the booking submission, in the backend's snake_case
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomerInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub is_guest: bool,
}

impl CustomerInput {
    pub fn from_contact(contact: &ContactInfo, is_guest: bool) -> Self {
        Self {
            email: contact.email.trim().to_string(),
            first_name: contact.first_name.trim().to_string(),
            last_name: contact.last_name.trim().to_string(),
            phone: contact.phone.trim().to_string(),
            address: contact.address.trim().to_string(),
            city: contact.city.trim().to_string(),
            state: contact.state.trim().to_string(),
            zip_code: contact.zip_code.trim().to_string(),
            is_guest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(is_valid_email("guest@example.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld@twice.com"));
    }

    #[test]
    fn required_fields_gate() {
        let mut contact = ContactInfo::default();
        assert!(!contact.has_required_fields());

        contact.email = "guest@example.com".to_string();
        contact.first_name = "John".to_string();
        assert!(!contact.has_required_fields());

        contact.last_name = "Doe".to_string();
        assert!(contact.has_required_fields());

        contact.email = "bogus".to_string();
        assert!(!contact.has_required_fields());
    }
}
