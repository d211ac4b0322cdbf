/// Composes the name a command is registered under. Without a prefix the default
/// `name` is used as is, otherwise the first character of `name` is upper-cased
/// and appended to the prefix (`custom` + `getIDToken` = `customGetIDToken`).
pub fn get_command_name(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => {
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => format!("{prefix}{}{}", first.to_uppercase(), chars.as_str()),
                None => prefix.to_owned(),
            }
        }
        _ => name.to_owned(),
    }
}
