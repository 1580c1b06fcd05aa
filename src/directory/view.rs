//! Plain-text rendering of the client state. Nothing here performs I/O.

use super::{
    api::UserApi,
    client::DirectoryClient,
    types::{Field, User, UserForm},
};

pub const TITLE: &str = "User Management";
pub const LOADING: &str = "Loading...";
pub const EMPTY: &str = "No users found.";

/// The whole screen: title, form, status line and table.
#[must_use]
pub fn render<A: UserApi>(client: &DirectoryClient<A>) -> String {
    let mut lines = vec![TITLE.to_string(), String::new()];
    lines.extend(form_lines(client.form()));

    if let Some(banner) = client.banner() {
        lines.push(String::new());
        lines.push(format!("  >> {}", banner.text()));
    }

    lines.push(String::new());
    lines.push(table(client.users(), client.is_loading()));

    lines.join("\n")
}

fn form_lines(form: &UserForm) -> Vec<String> {
    let width = Field::ALL
        .iter()
        .map(|field| field.label().len())
        .max()
        .unwrap_or_default();

    let mut lines: Vec<String> = Field::ALL
        .iter()
        .map(|&field| {
            let locked = if field == Field::Id && form.editing.is_some() {
                " (locked)"
            } else {
                ""
            };
            format!(
                "  {:<width$}  [{}]{locked}",
                format!("{}:", field.label()),
                form.get(field),
                width = width + 1
            )
        })
        .collect();

    lines.push(match form.editing {
        Some(id) => format!("  [Update #{id}] [Cancel]"),
        None => "  [Add]".to_string(),
    });

    lines
}

/// The user table, or a placeholder while loading or when the list is empty.
#[must_use]
pub fn table(users: &[User], loading: bool) -> String {
    if loading {
        return LOADING.to_string();
    }
    if users.is_empty() {
        return EMPTY.to_string();
    }

    let rows: Vec<[String; 3]> = users
        .iter()
        .map(|user| [user.id.to_string(), user.name.clone(), user.address.clone()])
        .collect();

    let header = [Field::Id, Field::Name, Field::Address].map(Field::label);
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 3]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![
        line(header),
        widths
            .map(|width| "-".repeat(width))
            .join("-+-"),
    ];
    out.extend(
        rows.iter()
            .map(|[id, name, address]| line([id.as_str(), name.as_str(), address.as_str()])),
    );

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{
        confirm::Answer,
        fake::{FakeApi, Op},
    };

    fn user(id: i64, name: &str, address: &str) -> User {
        User {
            id,
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn table_placeholders() {
        assert_eq!(table(&[], true), LOADING);
        assert_eq!(table(&[user(1, "A", "X")], true), LOADING);
        assert_eq!(table(&[], false), EMPTY);
    }

    #[test]
    fn table_single_row() {
        let rendered = table(&[user(1, "A", "X")], false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["ID | Name | Address", "---+------+--------", "1  | A    | X"]);
    }

    #[test]
    fn table_columns_grow_with_content() {
        let rendered = table(&[user(1, "A", "X"), user(1234, "Jane Doe", "Main St")], false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "ID   | Name     | Address");
        assert_eq!(lines[3], "1234 | Jane Doe | Main St");
    }

    #[tokio::test]
    async fn render_before_first_fetch() {
        let mut client = DirectoryClient::new(FakeApi::default());
        assert!(render(&client).ends_with(LOADING));

        client.list().await.unwrap();
        assert!(render(&client).ends_with(EMPTY));
    }

    #[tokio::test]
    async fn render_create_mode() {
        let mut client = DirectoryClient::new(FakeApi::with_users(vec![user(1, "A", "X")]));
        client.list().await.unwrap();

        let screen = render(&client);
        assert!(screen.starts_with(TITLE));
        assert!(screen.contains("[Add]"));
        assert!(!screen.contains(">>"));
        assert!(screen.contains("1  | A    | X"));
    }

    #[tokio::test]
    async fn render_editing_with_banner() {
        let mut client = DirectoryClient::new(FakeApi::with_users(vec![user(1, "A", "X")]));
        client.list().await.unwrap();
        client.begin_edit(&user(1, "A", "X"));
        client.api().fail(Op::Delete);
        let _ = client.delete(1, &mut Answer::Yes).await;

        let screen = render(&client);
        assert!(screen.contains("ID:       [1] (locked)"));
        assert!(screen.contains("Address:  [X]"));
        assert!(screen.contains("[Update #1] [Cancel]"));
        assert!(screen.contains(">> Failed to delete user."));
    }
}
