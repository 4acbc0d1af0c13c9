pub mod email;
pub mod float;
pub mod fullname;
pub mod phonenumber;
pub mod username;

pub trait PatternMatcher {
    fn matches(&self, value: &str) -> bool;

    /// Canonical rendering of an accepted value, `None` when it does not match.
    fn normalize(&self, value: &str) -> Option<String> {
        self.matches(value).then(|| value.to_string())
    }
}
