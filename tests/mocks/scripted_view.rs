use contact_assistant::View;
use std::collections::VecDeque;
use std::io;

/// View that replays prepared input lines and records everything displayed.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedView {
    input: VecDeque<String>,
    messages: Vec<String>,
    prompts: usize,
}

#[allow(dead_code)]
impl ScriptedView {
    /// Create a view that will answer prompts with `lines`, then report end of input.
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|line| line.to_string()).collect(),
            messages: Vec::new(),
            prompts: 0,
        }
    }

    /// Every message displayed so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of times input was requested.
    pub fn prompts(&self) -> usize {
        self.prompts
    }
}

impl View for ScriptedView {
    fn display(&mut self, message: &str) -> io::Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }

    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        self.prompts += 1;
        Ok(self.input.pop_front())
    }
}
