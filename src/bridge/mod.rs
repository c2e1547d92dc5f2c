//! Form-resource bridge
//!
//! Every user action is a [`Command`]. A command is first planned against the
//! current [`ViewState`] by [`dispatch`], which may reject it or keep it
//! local. Otherwise it yields one [`ApiRequest`]; the app executes that on its
//! own task and applies the resulting [`Outcome`] back to the view, so
//! requests run concurrently and completions land in arrival order.

mod command;
mod outcome;
mod request;

pub use command::Command;
pub use outcome::{Outcome, SUCCESS};
pub use request::ApiRequest;

#[cfg(test)]
pub use command::MISSING_CUSTOMER_ID;

use command::Plan;

use crate::state::{Panel, ViewState};

/// Apply a plan that needs no request.
///
/// Returns the request to send when there is one.
fn apply_local(plan: Plan, view: &mut ViewState) -> Option<ApiRequest> {
    match plan {
        Plan::Clear(Panel::Customer) => {
            view.clear_customer_panel();
            None
        }
        Plan::Clear(Panel::Address) => {
            view.clear_address_panel();
            None
        }
        Plan::Reject(message) => {
            tracing::info!("Rejected locally: {message}");
            view.flash(message);
            None
        }
        Plan::Send(request) => Some(request),
    }
}

/// Plan a command against the view and apply whatever needs no service.
///
/// Returns the request to send, if any; its [`Outcome`] is applied to the
/// view once it completes.
pub fn dispatch(command: Command, view: &mut ViewState) -> Option<ApiRequest> {
    tracing::debug!("Dispatching {command:?}");
    apply_local(command.plan(view), view)
}
