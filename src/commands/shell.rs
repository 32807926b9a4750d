// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Interactive session. State (transactions, profile, paid reminders) lives
//! until the shell exits; the reminder sound keeps repeating meanwhile.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::{dispatch, App};

pub fn run(app: &mut App) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    println!(
        "Hello, {}! Type a command (e.g. `overview`, `tx add --name Rent --amount 9000 --category Housing`), `help` or `exit`.",
        app.dash.profile().name
    );
    app.mount_reminders();

    loop {
        match rl.readline("budgetvision> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                if matches!(line, "exit" | "quit") {
                    break;
                }
                let words = split_words(line);
                if words.first().map(String::as_str) == Some("shell") {
                    println!("Already in the shell.");
                    continue;
                }
                match crate::cli::build_cli()
                    .no_binary_name(true)
                    .try_get_matches_from(words)
                {
                    Ok(m) => {
                        if let Err(e) = dispatch(app, &m) {
                            eprintln!("Error: {:#}", e);
                        }
                    }
                    Err(e) => {
                        let _ = e.print();
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(n) = app.notifier.take() {
        n.unmount();
    }
    Ok(())
}

/// Whitespace split that keeps "double quoted" or 'single quoted' runs together.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut cur = String::new();
    let mut quote: Option<char> = None;
    let mut in_word = false;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => cur.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut cur));
                    in_word = false;
                }
            }
            None => {
                cur.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(cur);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::split_words;

    #[test]
    fn quoted_names_stay_whole() {
        assert_eq!(
            split_words(r#"tx add --name "Grocery Shopping" --amount 2500"#),
            vec!["tx", "add", "--name", "Grocery Shopping", "--amount", "2500"]
        );
        assert_eq!(split_words("budget set --category '' "), vec!["budget", "set", "--category", ""]);
    }
}
