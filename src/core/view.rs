use std::fmt;

use super::address::{Address, Trigger};

/// Description of what a unit wants displayed
///
/// Views are plain values produced by `render`. The only way a view can cause
/// a state change is through the triggers attached to its buttons, which were
/// bound to an address handed down by the parent.
#[derive(Debug, Clone)]
pub enum View {
    Text(String),
    Button { label: String, on_press: Trigger },
    Row(Vec<View>),
    Column(Vec<View>),
}

impl View {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// A button that sends `msg` through `address` when pressed
    pub fn button<M>(label: impl Into<String>, address: &Address<M>, msg: M) -> Self
    where
        M: Clone + Send + Sync + 'static,
    {
        Self::Button {
            label: label.into(),
            on_press: address.trigger(msg),
        }
    }

    pub fn row(children: impl IntoIterator<Item = View>) -> Self {
        Self::Row(children.into_iter().collect())
    }

    pub fn column(children: impl IntoIterator<Item = View>) -> Self {
        Self::Column(children.into_iter().collect())
    }

    /// Prefix a child view with a text label on the same row
    pub fn labelled(label: impl Into<String>, child: View) -> Self {
        Self::Row(vec![Self::text(label), child])
    }

    /// All buttons in depth-first render order
    pub fn triggers(&self) -> Vec<(&str, &Trigger)> {
        let mut found = Vec::new();
        self.collect_triggers(&mut found);
        found
    }

    fn collect_triggers<'a>(&'a self, found: &mut Vec<(&'a str, &'a Trigger)>) {
        match self {
            View::Text(_) => {}
            View::Button { label, on_press } => found.push((label.as_str(), on_press)),
            View::Row(children) | View::Column(children) => {
                for child in children {
                    child.collect_triggers(found);
                }
            }
        }
    }

    /// Fire the `index`-th button (zero-based, render order)
    ///
    /// Returns `false` when there is no such button.
    pub fn press(&self, index: usize) -> bool {
        match self.triggers().get(index) {
            Some((label, trigger)) => {
                tracing::debug!(index, label, "pressing button");
                trigger.fire();
                true
            }
            None => false,
        }
    }

    /// Fire the first button carrying `label`
    pub fn press_label(&self, label: &str) -> bool {
        match self.triggers().into_iter().find(|(l, _)| *l == label) {
            Some((_, trigger)) => {
                trigger.fire();
                true
            }
            None => false,
        }
    }

    fn write_outline(
        &self,
        f: &mut fmt::Formatter<'_>,
        depth: usize,
        next_button: &mut usize,
    ) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            View::Text(content) => writeln!(f, "{indent}{content}"),
            View::Button { label, .. } => {
                let number = *next_button;
                *next_button += 1;
                writeln!(f, "{indent}[{number}] {label}")
            }
            View::Row(children) => {
                // Rows made only of leaves fit on one line
                if children
                    .iter()
                    .all(|c| matches!(c, View::Text(_) | View::Button { .. }))
                {
                    let mut parts = Vec::with_capacity(children.len());
                    for child in children {
                        if let View::Button { label, .. } = child {
                            parts.push(format!("[{}] {label}", *next_button));
                            *next_button += 1;
                        } else if let View::Text(content) = child {
                            parts.push(content.clone());
                        }
                    }
                    writeln!(f, "{indent}{}", parts.join("  "))
                } else {
                    for child in children {
                        child.write_outline(f, depth, next_button)?;
                    }
                    Ok(())
                }
            }
            View::Column(children) => {
                for child in children {
                    child.write_outline(f, depth + 1, next_button)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for View {
    /// Indented outline; buttons are numbered in the same order as [`View::triggers`]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut next_button = 0;
        match self {
            // The root column is not indented
            View::Column(children) => {
                for child in children {
                    child.write_outline(f, 0, &mut next_button)?;
                }
                Ok(())
            }
            other => other.write_outline(f, 0, &mut next_button),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;

    fn recording() -> (Address<&'static str>, Arc<Mutex<Vec<&'static str>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        (Address::new(move |msg| sink.lock().unwrap().push(msg)), log)
    }

    fn sample(address: &Address<&'static str>) -> View {
        View::column([
            View::text("title"),
            View::row([
                View::button("-", address, "dec"),
                View::text("0"),
                View::button("+", address, "inc"),
            ]),
            View::column([View::button("remove", address, "remove")]),
        ])
    }

    #[test]
    fn test_triggers_in_render_order() {
        let (address, _) = recording();
        let view = sample(&address);

        let labels: Vec<&str> = view.triggers().into_iter().map(|(l, _)| l).collect();

        assert_eq!(labels, vec!["-", "+", "remove"]);
    }

    #[test]
    fn test_press_fires_matching_trigger() {
        let (address, log) = recording();
        let view = sample(&address);

        assert!(view.press(1));
        assert!(view.press(2));
        assert!(view.press_label("-"));

        assert_eq!(*log.lock().unwrap(), vec!["inc", "remove", "dec"]);
    }

    #[test]
    fn test_press_out_of_range() {
        let (address, log) = recording();
        let view = sample(&address);

        assert!(!view.press(3));
        assert!(!view.press_label("missing"));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_display_outline_numbers_buttons() {
        let (address, _) = recording();
        let view = sample(&address);

        assert_eq!(
            view.to_string(),
            "title\n[0] -  0  [1] +\n  [2] remove\n"
        );
    }

    #[test]
    fn test_labelled() {
        let view = View::labelled("count:", View::text("3"));

        assert_eq!(view.to_string(), "count:  3\n");
    }
}
