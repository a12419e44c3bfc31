#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use pane_core::{Browser, Chrome, Config, DownloadRequest, Engine, EngineSession, PromptResponse, TabId};

pub const START: &str = "https://www.google.com";

/// Engine whose sessions append every call they receive to a shared log
#[derive(Default)]
pub struct MockEngine {
    pub calls: Rc<RefCell<Vec<(TabId, String)>>>,
}

impl MockEngine {
    pub fn calls_for(&self, tab_id: TabId) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|(id, _)| *id == tab_id)
            .map(|(_, call)| call.clone())
            .collect()
    }
}

pub struct MockSession {
    tab_id: TabId,
    url: String,
    calls: Rc<RefCell<Vec<(TabId, String)>>>,
}

impl MockSession {
    fn log(&self, call: String) {
        self.calls.borrow_mut().push((self.tab_id, call));
    }
}

impl Engine for MockEngine {
    type Session = MockSession;

    fn create_session(&mut self, tab_id: TabId, url: &str) -> MockSession {
        let session = MockSession {
            tab_id,
            url: url.to_string(),
            calls: Rc::clone(&self.calls),
        };
        session.log(format!("load {}", url));
        session
    }
}

impl EngineSession for MockSession {
    fn navigate(&mut self, url: &str) {
        self.url = url.to_string();
        self.log(format!("navigate {}", url));
    }

    fn go_back(&mut self) {
        self.log("back".to_string());
    }

    fn go_forward(&mut self) {
        self.log("forward".to_string());
    }

    fn reload(&mut self) {
        self.log("reload".to_string());
    }

    fn set_zoom(&mut self, factor: f64) -> f64 {
        self.log(format!("zoom {}", factor));
        factor
    }

    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn close(&mut self) {
        self.log("close".to_string());
    }
}

/// Chrome that records what it was told to show and answers prompts from
/// scripted queues. An empty queue answers as if the user cancelled.
#[derive(Default)]
pub struct MockChrome {
    pub strip: Vec<String>,
    pub current: Option<usize>,
    pub address_bar: String,
    pub text_answers: VecDeque<PromptResponse>,
    pub save_answers: VecDeque<Option<PathBuf>>,
    pub list_answers: VecDeque<Option<usize>>,
    pub save_defaults: Vec<PathBuf>,
    pub lists: Vec<(String, Vec<String>)>,
    pub notices: Vec<(String, String)>,
    pub opened: Vec<PathBuf>,
    pub window_closed: bool,
}

impl Chrome for MockChrome {
    fn add_tab_widget(&mut self, label: &str) -> usize {
        self.strip.push(label.to_string());
        self.strip.len() - 1
    }

    fn remove_tab_widget(&mut self, index: usize) {
        self.strip.remove(index);
    }

    fn set_current_strip_index(&mut self, index: usize) {
        self.current = Some(index);
    }

    fn set_tab_label(&mut self, index: usize, label: &str) {
        self.strip[index] = label.to_string();
    }

    fn address_bar_text(&self) -> String {
        self.address_bar.clone()
    }

    fn set_address_bar_text(&mut self, text: &str) {
        self.address_bar = text.to_string();
    }

    fn prompt_text(&mut self, _title: &str, _label: &str) -> PromptResponse {
        self.text_answers
            .pop_front()
            .unwrap_or(PromptResponse::Cancelled)
    }

    fn prompt_save_path(&mut self, _title: &str, default_path: &Path) -> Option<PathBuf> {
        self.save_defaults.push(default_path.to_path_buf());
        self.save_answers.pop_front().flatten()
    }

    fn show_list(&mut self, title: &str, items: &[String]) -> Option<usize> {
        self.lists.push((title.to_string(), items.to_vec()));
        self.list_answers.pop_front().flatten()
    }

    fn notify(&mut self, title: &str, message: &str) {
        self.notices.push((title.to_string(), message.to_string()));
    }

    fn open_path(&mut self, path: &Path) {
        self.opened.push(path.to_path_buf());
    }

    fn close_window(&mut self) {
        self.window_closed = true;
    }
}

pub struct MockDownload {
    pub url: String,
    pub suggested: PathBuf,
    pub path: Option<PathBuf>,
    pub accepted: bool,
}

impl MockDownload {
    pub fn new(url: &str, suggested: &str) -> Self {
        Self {
            url: url.to_string(),
            suggested: PathBuf::from(suggested),
            path: None,
            accepted: false,
        }
    }
}

impl DownloadRequest for MockDownload {
    fn url(&self) -> String {
        self.url.clone()
    }

    fn suggested_path(&self) -> PathBuf {
        self.suggested.clone()
    }

    fn set_path(&mut self, path: &Path) {
        self.path = Some(path.to_path_buf());
    }

    fn accept(&mut self) {
        self.accepted = true;
    }
}

pub type TestBrowser = Browser<MockEngine, MockChrome>;

pub fn browser() -> TestBrowser {
    let config = Config::new(PathBuf::from("/home/user/Downloads"));
    Browser::new(config, MockEngine::default(), MockChrome::default()).unwrap()
}

pub fn tab_id(browser: &TestBrowser, index: usize) -> TabId {
    browser.registry().slots()[index].id()
}
