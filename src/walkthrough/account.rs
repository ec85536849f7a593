use std::fmt;

use chrono::Local;

/// Minimum age for self-service signup
pub const MIN_SIGNUP_AGE: u32 = 13;

/// The only account tier handed out at signup
const ACCOUNT_TYPE: &str = "standard";

/// A user profile, constructed once and never mutated.
#[derive(Clone, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub age: u32,
    pub is_active: bool,
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ret = String::new();

        ret += "UserProfile {\n";
        ret += &format!("{}username: \"{}\",\n", indent(1), self.username);
        ret += &format!("{}email: \"{}\",\n", indent(1), self.email);
        ret += &format!("{}age: {},\n", indent(1), self.age);
        ret += &format!("{}is_active: {},\n", indent(1), self.is_active);
        ret += "}";

        write!(f, "{}", ret)
    }
}

/// Lifecycle state of a newly constructed account
///
/// An account that fails validation never leaves `Pending`, and a pending
/// account is never returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountStatus {
    Pending,
    Active,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountStatus::Pending => write!(f, "pending"),
            AccountStatus::Active => write!(f, "active"),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UserAccount {
    pub username: String,
    pub email: String,
    pub age: u32,
    /// Calendar date of creation, `YYYY-MM-DD`
    pub created_on: String,
    pub account_type: &'static str,
    pub status: AccountStatus,
    pub welcome_email_sent: bool,
}

impl fmt::Display for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ret = String::new();

        ret += "UserAccount {\n";
        ret += &format!("{}username: \"{}\",\n", indent(1), self.username);
        ret += &format!("{}email: \"{}\",\n", indent(1), self.email);
        ret += &format!("{}age: {},\n", indent(1), self.age);
        ret += &format!("{}created_on: \"{}\",\n", indent(1), self.created_on);
        ret += &format!("{}account_type: \"{}\",\n", indent(1), self.account_type);
        ret += &format!("{}status: \"{}\",\n", indent(1), self.status);
        ret += &format!(
            "{}welcome_email_sent: {},\n",
            indent(1),
            self.welcome_email_sent
        );
        ret += "}";

        write!(f, "{}", ret)
    }
}

fn indent(level: usize) -> String {
    " ".repeat(level * 4)
}

/// Current local calendar date, time of day discarded
fn today() -> String {
    Local::now().date_naive().to_string()
}

fn validate(username: &str, email: &str, age: u32) -> AccountStatus {
    if username.is_empty() || email.is_empty() || age < MIN_SIGNUP_AGE {
        AccountStatus::Pending
    } else {
        AccountStatus::Active
    }
}

/// Construct a new account record
///
/// Succeeds only when `username` and `email` are non-empty and the user is
/// at least `MIN_SIGNUP_AGE` years old. Invalid input is an expected
/// condition, signalled with `None` rather than an error. No side effects
/// either way.
pub fn create_user_account(username: &str, email: &str, age: u32) -> Option<UserAccount> {
    match validate(username, email, age) {
        AccountStatus::Pending => None,
        AccountStatus::Active => Some(UserAccount {
            username: username.to_string(),
            email: email.to_string(),
            age,
            created_on: today(),
            account_type: ACCOUNT_TYPE,
            status: AccountStatus::Active,
            welcome_email_sent: true,
        }),
    }
}

#[test]
fn test_create_user_account() {
    let account = create_user_account("mike_wilson", "mike@example.com", 25)
        .expect("valid input must produce an account");

    assert_eq!(account.username, "mike_wilson");
    assert_eq!(account.email, "mike@example.com");
    assert_eq!(account.age, 25);
    assert_eq!(account.created_on, today());
    assert_eq!(account.account_type, "standard");
    assert_eq!(account.status, AccountStatus::Active);
    assert!(account.welcome_email_sent);
}

#[test]
fn test_create_user_account_rejects_blank_fields() {
    assert!(create_user_account("", "x@x.com", 30).is_none());
    assert!(create_user_account("bob", "", 30).is_none());
    assert!(create_user_account("", "", 30).is_none());
}

#[test]
fn test_create_user_account_rejects_minors() {
    assert!(create_user_account("bob", "b@b.com", 10).is_none());
    assert!(create_user_account("bob", "b@b.com", 12).is_none());
    assert!(create_user_account("bob", "b@b.com", 13).is_some());
}

#[test]
fn test_created_on_is_a_calendar_date() {
    let account = create_user_account("bob", "b@b.com", 42).unwrap();

    // YYYY-MM-DD, no time-of-day component
    assert_eq!(account.created_on.len(), 10);
    assert_eq!(account.created_on.as_bytes()[4], b'-');
    assert_eq!(account.created_on.as_bytes()[7], b'-');
}

#[test]
fn test_account_display() {
    let account = UserAccount {
        username: "mike_wilson".to_string(),
        email: "mike@example.com".to_string(),
        age: 25,
        created_on: "2024-01-15".to_string(),
        account_type: ACCOUNT_TYPE,
        status: AccountStatus::Active,
        welcome_email_sent: true,
    };

    let rendered = format!("{}", account);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "UserAccount {");
    assert_eq!(lines[1], "    username: \"mike_wilson\",");
    assert_eq!(lines[4], "    created_on: \"2024-01-15\",");
    assert_eq!(lines[6], "    status: \"active\",");
    assert_eq!(lines[8], "}");
}

#[test]
fn test_profile_display() {
    let profile = UserProfile {
        username: "sarah_j".to_string(),
        email: "sarah@example.com".to_string(),
        age: 28,
        is_active: true,
    };

    let rendered = format!("{}", profile);

    assert!(rendered.starts_with("UserProfile {\n"));
    assert!(rendered.contains("    username: \"sarah_j\",\n"));
    assert!(rendered.contains("    is_active: true,\n"));
    assert!(rendered.ends_with("}"));
}
