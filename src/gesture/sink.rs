/// Receives the navigation request produced by a qualifying swipe.
pub trait NavigationSink {
    fn navigate_to(&mut self, path: &str);
}

impl<F> NavigationSink for F
where
    F: FnMut(&str),
{
    fn navigate_to(&mut self, path: &str) {
        self(path)
    }
}

/// Collects requested paths instead of acting on them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSink {
    pub paths: Vec<String>,
}

impl RecordingSink {
    pub fn last(&self) -> Option<&str> {
        self.paths.last().map(String::as_str)
    }

    pub fn take_last(&mut self) -> Option<String> {
        let last = self.paths.pop();
        self.paths.clear();
        last
    }
}

impl NavigationSink for RecordingSink {
    fn navigate_to(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }
}
