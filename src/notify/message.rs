use crate::submission::Submission;

/// Render the notification text for one submission. Absent optional fields
/// show as `-`.
pub fn render(submission: &Submission) -> String {
    format!(
        "\u{1F7E2} New Appeal Submission\n\nName: {}\nContact: {}\nLink: {}\n\nMessage:\n{}",
        escape(submission.name.as_deref().unwrap_or("-")),
        escape(submission.contact.as_deref().unwrap_or("-")),
        escape(submission.link.as_deref().unwrap_or("-")),
        escape(submission.message.as_deref().unwrap_or("-")),
    )
}

/// Escape the three characters the chat renderer treats as markup. Single
/// pass, so an `&` already in the input is never escaped twice.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    out
}
