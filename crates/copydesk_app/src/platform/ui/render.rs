use std::fmt::Write as _;

use copydesk_core::{
    AppViewModel, ErrorKind, FormFields, FormStatus, FormView, Intent, Platform, ServiceStatus,
    Severity,
};

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    let screens: Vec<String> = Intent::ALL
        .into_iter()
        .map(|intent| {
            let label = intent.config().label;
            if intent == view.active {
                format!("[{label}]")
            } else {
                label.to_string()
            }
        })
        .collect();
    let _ = writeln!(
        out,
        "{} | Service: {}",
        screens.join("  "),
        service_label(view.service)
    );

    if let Some(form) = view.active_form() {
        render_form(&mut out, form);
    }

    if let Some(notice) = &view.last_notice {
        let marker = match notice.severity {
            Severity::Info => "i",
            Severity::Error => "!",
        };
        let _ = writeln!(out, "{marker} {}: {}", notice.title, notice.description);
    }

    out
}

fn render_form(out: &mut String, form: &FormView) {
    let _ = writeln!(out, "== {} ==", form.label);
    match &form.fields {
        FormFields::Tags(tags) => {
            let keywords: Vec<&str> = tags.keywords.iter().collect();
            let _ = writeln!(out, "Keywords: {}", or_dash(&keywords.join(", ")));
            if !tags.pending_keyword.is_empty() {
                let _ = writeln!(out, "Pending:  {}", tags.pending_keyword);
            }
        }
        FormFields::Description(description) => {
            let _ = writeln!(out, "Name:     {}", or_dash(&description.name));
            let _ = writeln!(out, "Category: {}", or_dash(&description.category));
            let _ = writeln!(
                out,
                "Details:  {}",
                or_dash(description.details.as_deref().unwrap_or_default())
            );
        }
        FormFields::Marketing(marketing) => {
            let _ = writeln!(out, "Audience: {}", or_dash(&marketing.audience));
            let _ = writeln!(
                out,
                "Platform: {}  (one of {})",
                or_dash(&marketing.platform),
                platform_choices()
            );
        }
    }

    let _ = writeln!(out, "Status:   {}", status_label(form.status));

    if let Some(text) = &form.result_text {
        if form.intent == Intent::Tags {
            for tag in &form.tags {
                let _ = writeln!(out, "  #{} {}", tag.index, tag.text);
            }
        } else {
            let _ = writeln!(out, "{text}");
        }
        let _ = writeln!(out, "{}", if form.copied { "Copied!" } else { "(copy)" });
    }
}

fn status_label(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Idle => "Ready",
        FormStatus::Submitting => "Generating...",
        FormStatus::Succeeded => "Done",
        FormStatus::Failed(ErrorKind::RequestFailed) => "Request failed",
    }
}

fn service_label(service: ServiceStatus) -> &'static str {
    match service {
        ServiceStatus::Unknown => "checking",
        ServiceStatus::Reachable => "reachable",
        ServiceStatus::Unreachable => "unreachable",
    }
}

fn platform_choices() -> String {
    Platform::ALL
        .iter()
        .map(|platform| platform.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use copydesk_core::{update, AppState, Field, Msg};

    use super::*;

    fn apply(state: AppState, msgs: Vec<Msg>) -> AppState {
        msgs.into_iter().fold(state, |state, msg| update(state, msg).0)
    }

    #[test]
    fn fresh_state_shows_tags_screen() {
        let text = render(&AppState::new().view());
        assert!(text.starts_with("[SEO Tags]  Product Description  Marketing Content"));
        assert!(text.contains("Keywords: -"));
        assert!(text.contains("Status:   Ready"));
        assert!(!text.contains("(copy)"));
    }

    #[test]
    fn tag_results_render_as_numbered_entries() {
        let state = apply(
            AppState::new(),
            vec![
                Msg::FieldChanged {
                    intent: Intent::Tags,
                    field: Field::Keyword,
                    value: "shoes".to_string(),
                },
                Msg::KeywordAdded {
                    intent: Intent::Tags,
                },
                Msg::SubmitClicked {
                    intent: Intent::Tags,
                },
                Msg::GenerationCompleted {
                    intent: Intent::Tags,
                    submission: 1,
                    result: Ok("1. \"Run\"\n2. Trail".to_string()),
                },
                Msg::CopyClicked {
                    intent: Intent::Tags,
                },
            ],
        );

        let text = render(&state.view());
        assert!(text.contains("Keywords: shoes"));
        assert!(text.contains("  #1 Run\n  #2 Trail\n"));
        assert!(text.contains("Copied!"));
        assert!(text.contains("i Copied to clipboard: SEO tags have been copied"));
    }

    #[test]
    fn failure_shows_status_and_error_notice() {
        let state = apply(
            AppState::new(),
            vec![
                Msg::ScreenSelected(Intent::Description),
                Msg::FieldChanged {
                    intent: Intent::Description,
                    field: Field::Name,
                    value: "Flask".to_string(),
                },
                Msg::FieldChanged {
                    intent: Intent::Description,
                    field: Field::Category,
                    value: "Outdoor".to_string(),
                },
                Msg::SubmitClicked {
                    intent: Intent::Description,
                },
                Msg::GenerationCompleted {
                    intent: Intent::Description,
                    submission: 1,
                    result: Err(ErrorKind::RequestFailed),
                },
            ],
        );

        let text = render(&state.view());
        assert!(text.contains("== Product Description =="));
        assert!(text.contains("Status:   Request failed"));
        assert!(text.contains("! Error: Failed to generate product description."));
    }
}
