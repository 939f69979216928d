use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::{self, ApiError};
use crate::poller::{NotificationPoller, PollOutcome, TimerAction};
use crate::session;
use crate::settings;
use crate::Route;

type Controller = Rc<RefCell<NotificationPoller>>;
type IntervalSlot = Rc<RefCell<Option<Interval>>>;

async fn poll_once() -> PollOutcome {
    match api_client::notifications::unread_count().await {
        Ok(Some(count)) => PollOutcome::Count(count),
        Ok(None) => PollOutcome::NonNumeric,
        Err(ApiError::Timeout) => PollOutcome::TimedOut,
        Err(err) => PollOutcome::Failed(err.to_string()),
    }
}

/// One fetch cycle: run the request, feed the outcome to the state
/// machine, obey its timer command, and refresh the rendered snapshot.
fn make_poll(
    controller: Controller,
    interval: IntervalSlot,
    view: UseStateHandle<NotificationPoller>,
) -> Rc<dyn Fn()> {
    Rc::new(move || {
        if !controller.borrow().should_fetch() {
            return;
        }
        let controller = controller.clone();
        let interval = interval.clone();
        let view = view.clone();
        spawn_local(async move {
            let outcome = poll_once().await;
            let action = controller.borrow_mut().apply(outcome);
            if action == TimerAction::Cancel {
                interval.borrow_mut().take();
            }
            view.set(controller.borrow().clone());
        });
    })
}

/// Cancel-then-schedule, so at most one recurring timer exists per
/// mounted bell.
fn start_interval(interval: &IntervalSlot, poll: Rc<dyn Fn()>) {
    interval.borrow_mut().take();
    poll();
    let recurring = {
        let poll = poll.clone();
        Interval::new(settings::get_settings().poll_interval_ms, move || poll())
    };
    *interval.borrow_mut() = Some(recurring);
}

/// Navigation-bar bell with unread badge and a restart affordance when
/// polling has halted on an error. Renders nothing while unauthenticated.
#[function_component(NotificationBell)]
pub fn notification_bell() -> Html {
    let controller: Controller = use_mut_ref(NotificationPoller::new);
    let interval: IntervalSlot = use_mut_ref(|| None);
    let view = use_state(NotificationPoller::new);
    let navigator = use_navigator().unwrap();

    {
        let controller = controller.clone();
        let interval = interval.clone();
        let view = view.clone();
        use_effect_with((), move |_| {
            let action = controller.borrow_mut().activate(session::is_authenticated());
            match action {
                TimerAction::Restart => {
                    let poll = make_poll(controller.clone(), interval.clone(), view.clone());
                    start_interval(&interval, poll);
                }
                TimerAction::Cancel => {
                    interval.borrow_mut().take();
                }
                TimerAction::Keep => {}
            }
            view.set(controller.borrow().clone());

            move || {
                controller.borrow_mut().deactivate();
                interval.borrow_mut().take();
                log::debug!("Notification polling stopped on unmount");
            }
        });
    }

    let on_restart = {
        let controller = controller.clone();
        let interval = interval.clone();
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            if controller.borrow_mut().restart() == TimerAction::Restart {
                log::info!("Restarting notification polling");
                let poll = make_poll(controller.clone(), interval.clone(), view.clone());
                start_interval(&interval, poll);
                view.set(controller.borrow().clone());
            }
        })
    };

    let on_open = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Notifications))
    };

    if !session::is_authenticated() {
        return html! {};
    }

    let count = view.unread_count();

    html! {
        <div class="relative">
            <button class="relative cursor-pointer text-white hover:text-blue-400" onclick={on_open} title="Notifications">
                {"🔔"}
                if count > 0 {
                    <span class="absolute -top-2 -right-2 bg-red-600 text-white rounded-full h-4 w-4 text-xs flex items-center justify-center">
                        {count}
                    </span>
                }
            </button>
            if view.last_error().is_some() {
                <button
                    class="absolute -bottom-2 -right-2 text-red-500 text-xs cursor-pointer"
                    onclick={on_restart}
                    title="Notification polling stopped. Click to restart."
                >
                    {"⚠"}
                </button>
            }
        </div>
    }
}
