use uuid::Uuid;

/// Id the gateway knows this user by: the first account name that looks like
/// an e-mail address, or a random UUID.
pub fn resolve_user_id<S: AsRef<str>>(accounts: &[S]) -> String {
    accounts
        .iter()
        .map(|account| account.as_ref())
        .find(|name| is_email_address(name))
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

fn is_email_address(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_email_account_wins() {
        let accounts = ["Work phone", "jane@example.com", "joe@example.org"];
        assert_eq!(resolve_user_id(&accounts), "jane@example.com");
    }

    #[test]
    fn test_uuid_fallback() {
        let accounts = ["no-at-sign", "a@b", "@example.com", "x y@example.com"];
        let user_id = resolve_user_id(&accounts);

        assert!(Uuid::parse_str(&user_id).is_ok());
        assert_ne!(user_id, resolve_user_id::<&str>(&[]));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_email_address("a.b@mail.example.com"));
        assert!(!is_email_address("a@example."));
        assert!(!is_email_address("a@@example.com"));
    }
}
