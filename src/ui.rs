use crate::status::StatusSnapshot;

pub fn render_status(snapshot: &StatusSnapshot) -> String {
    if !snapshot.visible {
        return String::new();
    }

    match snapshot.class {
        Some(class) => format!("[{}] {}", class.as_str(), snapshot.text),
        None => snapshot.text.clone(),
    }
}
