//! Recording fakes for the host seams, shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use crate::error::{PanelError, TransportError};
use crate::host::{Browser, LoginFormView, LoginTransport, LogoutSource, PopupView};

#[derive(Default)]
pub struct FakeBrowser {
    pub navigations: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
    pub prompts: RefCell<Vec<String>>,
    pub confirm_answer: Cell<bool>,
    pub submitted: RefCell<Vec<(String, Vec<(String, String)>)>>,
    pub fail_submit: Cell<bool>,
}

impl FakeBrowser {
    pub fn confirming(answer: bool) -> Self {
        let browser = Self::default();
        browser.confirm_answer.set(answer);
        browser
    }
}

impl Browser for FakeBrowser {
    fn navigate(&self, url: &str) {
        self.navigations.borrow_mut().push(url.to_owned());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_owned());
        self.confirm_answer.get()
    }

    fn submit_form(&self, action: &str, fields: &[(String, String)]) -> Result<(), PanelError> {
        if self.fail_submit.get() {
            return Err(PanelError::Dom("submit refused".to_owned()));
        }
        self.submitted.borrow_mut().push((action.to_owned(), fields.to_vec()));
        Ok(())
    }
}

pub struct FakePopup {
    pub visible: Cell<bool>,
}

impl FakePopup {
    pub fn open() -> Self {
        Self { visible: Cell::new(true) }
    }

    pub fn closed() -> Self {
        Self { visible: Cell::new(false) }
    }
}

impl PopupView for FakePopup {
    fn is_visible(&self) -> bool {
        self.visible.get()
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

pub struct FakeLoginForm {
    pub action: String,
    pub fields: Vec<(String, String)>,
    pub busy: RefCell<Vec<bool>>,
}

impl FakeLoginForm {
    pub fn new(action: &str, fields: &[(&str, &str)]) -> Self {
        Self {
            action: action.to_owned(),
            fields: fields.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
            busy: RefCell::new(Vec::new()),
        }
    }
}

impl LoginFormView for FakeLoginForm {
    fn action(&self) -> String {
        self.action.clone()
    }

    fn fields(&self) -> Vec<(String, String)> {
        self.fields.clone()
    }

    fn set_busy(&self, busy: bool) {
        self.busy.borrow_mut().push(busy);
    }
}

#[derive(Default)]
pub struct FakeLogoutSource {
    pub action: Option<String>,
    pub security_token: Option<String>,
    pub next: Option<String>,
}

impl FakeLogoutSource {
    pub fn complete(action: &str, token: &str, next: &str) -> Self {
        Self { action: Some(action.to_owned()), security_token: Some(token.to_owned()), next: Some(next.to_owned()) }
    }
}

impl LogoutSource for FakeLogoutSource {
    fn action(&self) -> Option<String> {
        self.action.clone()
    }

    fn security_token(&self) -> Option<String> {
        self.security_token.clone()
    }

    fn next(&self) -> Option<String> {
        self.next.clone()
    }
}

type Reply = Result<String, TransportError>;

enum Queued {
    Ready(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

/// Transport answering calls from a queue; an empty queue is a network error.
#[derive(Default)]
pub struct FakeTransport {
    queue: RefCell<VecDeque<Queued>>,
    pub calls: RefCell<Vec<(String, String)>>,
}

impl FakeTransport {
    pub fn replying(body: &str) -> Self {
        let transport = Self::default();
        transport.push(Ok(body.to_owned()));
        transport
    }

    pub fn failing(err: TransportError) -> Self {
        let transport = Self::default();
        transport.push(Err(err));
        transport
    }

    pub fn push(&self, reply: Reply) {
        self.queue.borrow_mut().push_back(Queued::Ready(reply));
    }

    /// Queue a reply the test resolves later through the returned sender.
    pub fn defer(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.queue.borrow_mut().push_back(Queued::Deferred(rx));
        tx
    }
}

impl LoginTransport for FakeTransport {
    fn post_form(&self, action: &str, body: String) -> LocalBoxFuture<'static, Reply> {
        self.calls.borrow_mut().push((action.to_owned(), body));
        let queued = self.queue.borrow_mut().pop_front();
        Box::pin(async move {
            match queued {
                Some(Queued::Ready(reply)) => reply,
                Some(Queued::Deferred(rx)) => {
                    rx.await.unwrap_or_else(|_| Err(TransportError::Network("request dropped".to_owned())))
                }
                None => Err(TransportError::Network("no reply queued".to_owned())),
            }
        })
    }
}
