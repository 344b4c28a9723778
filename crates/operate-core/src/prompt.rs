//! System prompt construction

/// Greeting shown before asking the user for an objective
pub const USER_QUESTION: &str = "Hello, I can help you with anything. What would you like done?";

const OBJECTIVE_PLACEHOLDER: &str = "{objective}";

const DEFAULT_SYSTEM_PROMPT: &str = r#"You are operating a {os} computer, using the same operating system as a human.

From looking at the screen, the objective, and your previous actions, take the next best series of actions.

You have 5 possible operations:

1. click - Move the mouse and click
```
[{"thought": "write a thought here", "operation": "click", "x": "x percent (e.g. 0.10)", "y": "y percent (e.g. 0.13)"}]
```
2. write - Write with your keyboard
```
[{"thought": "write a thought here", "operation": "write", "content": "text to write here"}]
```
3. press - Press a key in sequence
```
[{"thought": "write a thought here", "operation": "press", "keys": ["keys to use"]}]
```
4. hotkey - Press keys together as a shortcut
```
[{"thought": "write a thought here", "operation": "hotkey", "keys": ["ctrl", "l"]}]
```
5. done - The objective is completed
```
[{"thought": "write a thought here", "operation": "done", "summary": "summary of what was completed"}]
```

Return the actions in array format `[]`. You can take just one action or multiple actions.

Tips:
- Use keyboard shortcuts where they are faster than the mouse.
- Click coordinates are fractions of the screen width and height.
- Only return `done` once you have verified the objective is complete.
- Respond with the JSON array only, without any other text.

Objective: {objective}
"#;

/// Build the system prompt for an objective.
///
/// A custom prompt replaces the default template entirely; `{objective}` is
/// substituted in either. The model id is recorded for tracing only, every
/// supported model speaks the same operation format.
pub fn system_prompt(model: &str, objective: &str, custom: Option<&str>) -> String {
    tracing::debug!(model, custom = custom.is_some(), "building system prompt");

    match custom.filter(|c| !c.trim().is_empty()) {
        Some(custom) if custom.contains(OBJECTIVE_PLACEHOLDER) => {
            custom.replace(OBJECTIVE_PLACEHOLDER, objective)
        }
        Some(custom) => format!("{}\n\nObjective: {}", custom.trim_end(), objective),
        None => DEFAULT_SYSTEM_PROMPT
            .replace("{os}", operating_system_name())
            .replace(OBJECTIVE_PLACEHOLDER, objective),
    }
}

/// User message sent with every query, reminding the model of the objective
pub fn user_turn_prompt(objective: &str, has_screenshot: bool) -> String {
    if has_screenshot {
        format!(
            "Please take the next best action. The screenshot of the current screen is attached. Objective: {}",
            objective
        )
    } else {
        format!("Please take the next best action. Objective: {}", objective)
    }
}

fn operating_system_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => "Mac",
        "windows" => "Windows",
        _ => "Linux",
    }
}
