use copydesk_core::{Field, Intent, Msg, Platform};

pub const HELP: &str = "\
Screens:  tags | description | marketing
Tags:     add <keyword> | remove <keyword>
Fields:   set name|category|details|audience|platform <value>
Actions:  submit | copy | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    Unknown(String),
}

/// Maps one console line onto messages for the active screen.
pub fn parse(line: &str, active: Intent) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" => Command::Dispatch(vec![Msg::NoOp]),
        "tags" => Command::Dispatch(vec![Msg::ScreenSelected(Intent::Tags)]),
        "description" => Command::Dispatch(vec![Msg::ScreenSelected(Intent::Description)]),
        "marketing" => Command::Dispatch(vec![Msg::ScreenSelected(Intent::Marketing)]),
        "add" if active == Intent::Tags => Command::Dispatch(vec![
            Msg::FieldChanged {
                intent: active,
                field: Field::Keyword,
                value: rest.to_string(),
            },
            Msg::KeywordAdded { intent: active },
        ]),
        "remove" if active == Intent::Tags => Command::Dispatch(vec![Msg::KeywordRemoved {
            intent: active,
            keyword: rest.to_string(),
        }]),
        "add" | "remove" => Command::Unknown("keywords only exist on the tags screen".to_string()),
        "set" => parse_set(rest, active),
        "submit" | "generate" => Command::Dispatch(vec![Msg::SubmitClicked { intent: active }]),
        "copy" => Command::Dispatch(vec![Msg::CopyClicked { intent: active }]),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(format!("unknown command `{other}`")),
    }
}

fn parse_set(rest: &str, active: Intent) -> Command {
    let (name, value) = match rest.split_once(char::is_whitespace) {
        Some((name, value)) => (name, value.trim()),
        None => (rest, ""),
    };
    let field = match (active, name.to_ascii_lowercase().as_str()) {
        (Intent::Tags, "keyword") => Field::Keyword,
        (Intent::Description, "name") => Field::Name,
        (Intent::Description, "category") => Field::Category,
        (Intent::Description, "details") => Field::Details,
        (Intent::Marketing, "audience") => Field::Audience,
        (Intent::Marketing, "platform") => Field::Platform,
        _ => {
            return Command::Unknown(format!(
                "`{name}` is not a field of {}",
                active.config().label
            ))
        }
    };
    let value = if field == Field::Platform {
        canonical_platform(value)
    } else {
        value.to_string()
    };
    Command::Dispatch(vec![Msg::FieldChanged {
        intent: active,
        field,
        value,
    }])
}

/// Console convenience: accept platform names in any case. Unknown names pass
/// through unchanged and are rejected at submit.
fn canonical_platform(value: &str) -> String {
    Platform::ALL
        .into_iter()
        .find(|platform| platform.as_str().eq_ignore_ascii_case(value))
        .map(|platform| platform.as_str().to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sets_pending_keyword_then_confirms_it() {
        assert_eq!(
            parse("add  running shoes ", Intent::Tags),
            Command::Dispatch(vec![
                Msg::FieldChanged {
                    intent: Intent::Tags,
                    field: Field::Keyword,
                    value: "running shoes".to_string(),
                },
                Msg::KeywordAdded {
                    intent: Intent::Tags
                },
            ])
        );
    }

    #[test]
    fn keyword_commands_are_rejected_off_the_tags_screen() {
        assert!(matches!(
            parse("add shoes", Intent::Marketing),
            Command::Unknown(_)
        ));
    }

    #[test]
    fn set_targets_active_form_and_keeps_spaces_in_value() {
        assert_eq!(
            parse("set details Two litres, steel", Intent::Description),
            Command::Dispatch(vec![Msg::FieldChanged {
                intent: Intent::Description,
                field: Field::Details,
                value: "Two litres, steel".to_string(),
            }])
        );
        assert!(matches!(
            parse("set audience Gamers", Intent::Description),
            Command::Unknown(_)
        ));
    }

    #[test]
    fn platform_is_canonicalised_case_insensitively() {
        assert_eq!(
            parse("set platform linkedin", Intent::Marketing),
            Command::Dispatch(vec![Msg::FieldChanged {
                intent: Intent::Marketing,
                field: Field::Platform,
                value: "LinkedIn".to_string(),
            }])
        );
        assert_eq!(
            parse("set platform MySpace", Intent::Marketing),
            Command::Dispatch(vec![Msg::FieldChanged {
                intent: Intent::Marketing,
                field: Field::Platform,
                value: "MySpace".to_string(),
            }])
        );
    }

    #[test]
    fn screen_and_action_verbs() {
        assert_eq!(
            parse("Marketing", Intent::Tags),
            Command::Dispatch(vec![Msg::ScreenSelected(Intent::Marketing)])
        );
        assert_eq!(
            parse("submit", Intent::Description),
            Command::Dispatch(vec![Msg::SubmitClicked {
                intent: Intent::Description
            }])
        );
        assert_eq!(
            parse("copy", Intent::Tags),
            Command::Dispatch(vec![Msg::CopyClicked {
                intent: Intent::Tags
            }])
        );
        assert_eq!(parse("   ", Intent::Tags), Command::Dispatch(vec![Msg::NoOp]));
        assert_eq!(parse("quit", Intent::Tags), Command::Quit);
        assert_eq!(parse("?", Intent::Tags), Command::Help);
        assert!(matches!(parse("launch", Intent::Tags), Command::Unknown(_)));
    }
}
