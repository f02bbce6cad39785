//! Shared HTML building blocks for the form pages.

use maud::{DOCTYPE, Markup, PreEscaped, html};

// Link styles
pub const LINK_STYLE: &str = "link";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "button-primary";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "form-container";
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-input";

const BASE_STYLE: &str = r#"
    body {
        font-family: system-ui, sans-serif;
        background: #f9fafb;
        color: #111827;
    }

    .form-container {
        display: flex;
        flex-direction: column;
        max-width: 28rem;
        margin: 2rem auto;
        gap: 1rem;
    }

    .form-label {
        display: block;
        margin-bottom: 0.5rem;
        font-size: 0.875rem;
        font-weight: 500;
    }

    .form-input {
        display: block;
        width: 100%;
        padding: 0.625rem;
        border: 1px solid #d1d5db;
        border-radius: 0.25rem;
        box-sizing: border-box;
    }

    .button-primary {
        width: 100%;
        padding: 0.5rem 1rem;
        color: white;
        background: #3b82f6;
        border: none;
        border-radius: 0.25rem;
        cursor: pointer;
    }

    .link {
        color: #2563eb;
        text-decoration: underline;
    }
"#;

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - SentinelStream" }
                style { (PreEscaped(BASE_STYLE)) }
            }

            body
            {
                (content)
            }
        }
    }
}
