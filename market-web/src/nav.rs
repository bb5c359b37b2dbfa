//! Global page navigation without a router.
//!
//! One shared page value plus a list of subscriber callbacks. [`navigate`]
//! overwrites the value and synchronously invokes every subscriber with it,
//! in registration order, on the calling thread. There is no deduplication
//! (navigating to the current page notifies everyone again), no history stack,
//! and no persistence: a full reload starts back at [`Page::Home`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;

/// Pages reachable in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Login,
    Register,
    Admin,
    Farmer,
}

type Listener = Rc<dyn Fn(Page)>;

/// Handle returned by [`PageBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(usize);

/// Current page plus its subscriber list.
///
/// Not a state machine: any page may follow any page and there are no guards.
/// Single-threaded by construction; the app-wide instance lives in a
/// thread-local.
pub struct PageBus {
    current: Cell<Page>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_id: Cell<usize>,
}

impl PageBus {
    pub fn new() -> Self {
        Self {
            current: Cell::new(Page::Home),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn current(&self) -> Page {
        self.current.get()
    }

    /// Overwrite the current page, then notify subscribers in registration
    /// order.
    pub fn navigate(&self, page: Page) {
        self.current.set(page);
        // Snapshot first: a listener may subscribe or unsubscribe while being
        // notified, which must not alias the live borrow.
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(page);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(Page) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }
}

impl Default for PageBus {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static BUS: PageBus = PageBus::new();
}

/// Switch the app to `page`.
pub fn navigate(page: Page) {
    BUS.with(|bus| bus.navigate(page));
}

/// The page currently shown, read without subscribing.
pub fn current_page() -> Page {
    BUS.with(|bus| bus.current())
}

/// Subscribe the calling component to page changes.
///
/// Returns a signal tracking every [`navigate`] call; the subscription is
/// removed when the component is torn down.
pub fn use_page() -> ReadSignal<Page> {
    let (page, set_page) = signal(current_page());
    let id = BUS.with(|bus| bus.subscribe(move |next| set_page.set(next)));
    on_cleanup(move || BUS.with(|bus| bus.unsubscribe(id)));
    page
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(bus: &PageBus, log: &Rc<RefCell<Vec<(&'static str, Page)>>>, tag: &'static str) -> ListenerId {
        let log = Rc::clone(log);
        bus.subscribe(move |page| log.borrow_mut().push((tag, page)))
    }

    #[test]
    fn starts_at_home() {
        let bus = PageBus::new();
        assert_eq!(bus.current(), Page::Home);
    }

    #[test]
    fn subscribers_observe_every_navigation_in_call_order() {
        let bus = PageBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        recorder(&bus, &log, "a");
        recorder(&bus, &log, "b");

        bus.navigate(Page::Login);
        bus.navigate(Page::Farmer);

        assert_eq!(
            *log.borrow(),
            vec![
                ("a", Page::Login),
                ("b", Page::Login),
                ("a", Page::Farmer),
                ("b", Page::Farmer),
            ]
        );
        assert_eq!(bus.current(), Page::Farmer);
    }

    #[test]
    fn unsubscribed_listener_never_fires_again() {
        let bus = PageBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let id = recorder(&bus, &log, "a");

        bus.navigate(Page::Login);
        bus.unsubscribe(id);
        bus.navigate(Page::Admin);

        assert_eq!(*log.borrow(), vec![("a", Page::Login)]);
        assert_eq!(bus.current(), Page::Admin);
    }

    #[test]
    fn navigating_to_the_current_page_notifies_again() {
        let bus = PageBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        recorder(&bus, &log, "a");

        bus.navigate(Page::Farmer);
        bus.navigate(Page::Farmer);

        assert_eq!(*log.borrow(), vec![("a", Page::Farmer), ("a", Page::Farmer)]);
    }

    #[test]
    fn listener_may_unsubscribe_itself_during_notification() {
        let bus = Rc::new(PageBus::new());
        let fired = Rc::new(Cell::new(0));

        let slot: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        let id = {
            let bus = Rc::clone(&bus);
            let fired = Rc::clone(&fired);
            let slot = Rc::clone(&slot);
            bus.clone().subscribe(move |_| {
                fired.set(fired.get() + 1);
                if let Some(id) = slot.get() {
                    bus.unsubscribe(id);
                }
            })
        };
        slot.set(Some(id));

        bus.navigate(Page::Login);
        bus.navigate(Page::Register);
        assert_eq!(fired.get(), 1);
    }
}
