//! 页面渲染
//!
//! 纯函数：根据表单状态和用户列表生成整页文本，不做任何 I/O

use std::fmt::Write;

use crate::models::{FormState, UserList};
use crate::validation::Field;

pub const FORM_TITLE: &str = "Add User Details";
pub const LIST_HEADING: &str = "List of Users";
pub const EMPTY_LIST_MESSAGE: &str = "No users currently.";
pub const SUBMIT_LABEL: &str = "[ Submit ]";

const CARD_WIDTH: usize = 24;

/// 渲染整页：表单在上，用户列表在下
pub fn render_page(form: &FormState, users: &UserList) -> String {
    let mut out = render_form(form);
    out.push('\n');
    out.push_str(&render_user_list(users));
    out
}

/// 渲染表单，每个输入框下方显示该字段的错误
pub fn render_form(form: &FormState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", FORM_TITLE);
    let _ = writeln!(out, "{}", "=".repeat(FORM_TITLE.len()));

    render_field(&mut out, form, Field::Name, "Name", &form.input.name);
    render_field(
        &mut out,
        form,
        Field::Age,
        "Age",
        form.input.age.as_deref().unwrap_or_default(),
    );

    let _ = writeln!(out, "{}", SUBMIT_LABEL);
    out
}

fn render_field(out: &mut String, form: &FormState, field: Field, label: &str, value: &str) {
    let _ = writeln!(out, "{}: {}", label, value);
    if let Some(error) = form.errors.get(&field) {
        let _ = writeln!(out, "  ! {}", error);
    }
}

/// 渲染用户列表；为空时显示固定提示
pub fn render_user_list(users: &UserList) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", LIST_HEADING);

    if users.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_LIST_MESSAGE);
        return out;
    }

    for user in users {
        let _ = writeln!(out, "{}", "─".repeat(CARD_WIDTH));
        let _ = writeln!(out, "{}", user.name);
        let _ = writeln!(out, "{}", user.age);
    }
    let _ = writeln!(out, "{}", "─".repeat(CARD_WIDTH));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormInput, UserRecord};
    use crate::validation::{self, ValidationError};

    #[test]
    fn test_empty_list_shows_message() {
        let out = render_user_list(&UserList::new());
        assert!(out.contains(EMPTY_LIST_MESSAGE));
    }

    #[test]
    fn test_single_user_card() {
        let users = UserList::from(vec![UserRecord::new("Bob", 25)]);
        let out = render_user_list(&users);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], LIST_HEADING);
        assert_eq!(lines[2], "Bob");
        assert_eq!(lines[3], "25");
        assert!(!out.contains(EMPTY_LIST_MESSAGE));
        assert_eq!(lines.iter().filter(|l| **l == "Bob").count(), 1);
    }

    #[test]
    fn test_errors_render_beneath_their_input() {
        let input = FormInput::new("", "3.5");
        let errors = validation::validate(&input).unwrap_err();
        let form = FormState { input, errors };

        let out = render_form(&form);
        let lines: Vec<&str> = out.lines().collect();
        let name_at = lines.iter().position(|l| *l == "Name: ").unwrap();
        let age_at = lines.iter().position(|l| *l == "Age: 3.5").unwrap();

        assert_eq!(lines[name_at + 1], "  ! Name is required");
        assert_eq!(lines[age_at + 1], "  ! Age must be an integer");
    }

    #[test]
    fn test_form_without_errors_has_no_error_lines() {
        let mut form = FormState::default();
        form.errors.insert(Field::Age, ValidationError::AgeRequired);
        assert!(render_form(&form).contains("  ! Age is required"));

        form.errors.clear();
        assert!(!render_form(&form).contains("  ! "));
    }

    #[test]
    fn test_page_has_form_then_list() {
        let out = render_page(&FormState::default(), &UserList::new());
        let title_at = out.find(FORM_TITLE).unwrap();
        let heading_at = out.find(LIST_HEADING).unwrap();
        assert!(title_at < heading_at);
    }
}
