//! Canned prompts served by `prompts/list` and `prompts/get`.

use serde::Serialize;
use serde_json::{Value, json};

/// Prompt argument as listed to clients.
#[derive(Debug, Clone, Serialize)]
pub struct PromptArgument {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// Prompt as listed to clients.
#[derive(Debug, Clone, Serialize)]
pub struct Prompt {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: &'static [PromptArgument],
}

pub const PROMPTS: &[Prompt] = &[
    Prompt {
        name: "search_cybersecurity_companies",
        description: "Search for information about cybersecurity companies in the Tracxn database",
        arguments: &[PromptArgument {
            name: "limit",
            description: "Number of companies to retrieve (max 10)",
            required: false,
        }],
    },
    Prompt {
        name: "lookup_company",
        description: "Lookup detailed information about a specific company by domain name",
        arguments: &[PromptArgument {
            name: "domain",
            description: "Company domain (e.g., 'crowdstrike.com')",
            required: true,
        }],
    },
    Prompt {
        name: "search_funded_companies",
        description: "Find cybersecurity companies with specific funding amounts",
        arguments: &[
            PromptArgument {
                name: "min_funding",
                description: "Minimum funding amount in USD",
                required: false,
            },
            PromptArgument {
                name: "max_funding",
                description: "Maximum funding amount in USD",
                required: false,
            },
        ],
    },
];

/// Render a prompt with its arguments, or `None` for an unknown name.
///
/// Argument values may be strings or numbers; anything missing takes the
/// prompt's default.
#[must_use]
pub fn render(name: &str, arguments: &Value) -> Option<Value> {
    let arg = |key: &str, default: &str| -> String {
        match arguments.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => default.to_string(),
        }
    };

    let (description, text) = match name {
        "search_cybersecurity_companies" => {
            let limit = arg("limit", "5");
            (
                format!("Searching for top {limit} cybersecurity companies"),
                format!("Find information about the top {limit} cybersecurity companies"),
            )
        }
        "lookup_company" => {
            let domain = arg("domain", "");
            (
                format!("Looking up information about {domain}"),
                format!("Find detailed information about the company with domain {domain}"),
            )
        }
        "search_funded_companies" => {
            let min = arg("min_funding", "10000000");
            let max = arg("max_funding", "100000000");
            (
                format!("Finding cybersecurity companies with funding between ${min} and ${max}"),
                format!("Find cybersecurity companies with funding between ${min} and ${max}"),
            )
        }
        _ => return None,
    };

    Some(json!({
        "description": description,
        "messages": [{
            "role": "user",
            "content": { "type": "text", "text": text }
        }]
    }))
}
