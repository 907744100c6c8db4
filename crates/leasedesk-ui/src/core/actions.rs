//! Quick actions offered on the dashboard, keyed by viewer role.
//!
//! # Design
//! - Each role maps to a fixed, ordered table of exactly four actions.
//! - Actions carry no behaviour of their own; handlers are injected by the caller.
//! - Unbound actions route to a fallback callback that receives the action kind.

use std::collections::HashMap;

use yew::Callback;

use super::role::Role;

/// Number of actions every role table holds.
pub const ACTIONS_PER_ROLE: usize = 4;

/// Symbolic glyph names resolved by the icon provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Group of people.
    Users,
    /// Cog wheel.
    Settings,
    /// Bar chart.
    Chart,
    /// Clipboard with a checklist.
    ClipboardList,
    /// Building outline.
    Building,
    /// Person with a plus sign.
    UserPlus,
    /// Document with text lines.
    FileText,
    /// Funnel.
    Filter,
    /// Payment card.
    CreditCard,
    /// Wrench.
    Wrench,
    /// Signed document.
    FileSignature,
    /// Speech bubble.
    MessageSquare,
}

/// Every action a role table can reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Open user administration.
    ManageUsers,
    /// Open system-wide settings.
    SystemSettings,
    /// Browse platform reports.
    ViewReports,
    /// Inspect the audit trail.
    AuditLog,
    /// Register a new property.
    AddProperty,
    /// Register a new tenant.
    AddTenant,
    /// Produce a portfolio report.
    GenerateReport,
    /// Narrow the current view.
    FilterView,
    /// Start a rent payment.
    PayRent,
    /// File a maintenance request.
    RequestMaintenance,
    /// Show the active lease.
    ViewLease,
    /// Message the landlord.
    ContactLandlord,
}

impl ActionKind {
    /// Button label shown on the panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ManageUsers => "Manage Users",
            Self::SystemSettings => "System Settings",
            Self::ViewReports => "View Reports",
            Self::AuditLog => "Audit Log",
            Self::AddProperty => "Add Property",
            Self::AddTenant => "Add Tenant",
            Self::GenerateReport => "Generate Report",
            Self::FilterView => "Filter View",
            Self::PayRent => "Pay Rent",
            Self::RequestMaintenance => "Request Maintenance",
            Self::ViewLease => "View Lease",
            Self::ContactLandlord => "Contact Landlord",
        }
    }

    /// Glyph shown beside the label.
    #[must_use]
    pub const fn icon(self) -> IconKind {
        match self {
            Self::ManageUsers => IconKind::Users,
            Self::SystemSettings => IconKind::Settings,
            Self::ViewReports => IconKind::Chart,
            Self::AuditLog => IconKind::ClipboardList,
            Self::AddProperty => IconKind::Building,
            Self::AddTenant => IconKind::UserPlus,
            Self::GenerateReport => IconKind::FileText,
            Self::FilterView => IconKind::Filter,
            Self::PayRent => IconKind::CreditCard,
            Self::RequestMaintenance => IconKind::Wrench,
            Self::ViewLease => IconKind::FileSignature,
            Self::ContactLandlord => IconKind::MessageSquare,
        }
    }
}

const ADMIN_ACTIONS: [ActionKind; ACTIONS_PER_ROLE] = [
    ActionKind::ManageUsers,
    ActionKind::SystemSettings,
    ActionKind::ViewReports,
    ActionKind::AuditLog,
];

const LANDLORD_ACTIONS: [ActionKind; ACTIONS_PER_ROLE] = [
    ActionKind::AddProperty,
    ActionKind::AddTenant,
    ActionKind::GenerateReport,
    ActionKind::FilterView,
];

const TENANT_ACTIONS: [ActionKind; ACTIONS_PER_ROLE] = [
    ActionKind::PayRent,
    ActionKind::RequestMaintenance,
    ActionKind::ViewLease,
    ActionKind::ContactLandlord,
];

/// Ordered action table for a role.
#[must_use]
pub const fn role_actions(role: Role) -> &'static [ActionKind; ACTIONS_PER_ROLE] {
    match role {
        Role::Admin => &ADMIN_ACTIONS,
        Role::Landlord => &LANDLORD_ACTIONS,
        Role::Tenant => &TENANT_ACTIONS,
    }
}

/// Caller-supplied behaviour for quick actions.
///
/// Actions with an explicit handler invoke it; every other action emits its
/// [`ActionKind`] on the fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionHandlers {
    fallback: Callback<ActionKind>,
    overrides: HashMap<ActionKind, Callback<()>>,
}

impl ActionHandlers {
    /// Handlers that route every action to `fallback`.
    #[must_use]
    pub fn new(fallback: Callback<ActionKind>) -> Self {
        Self {
            fallback,
            overrides: HashMap::new(),
        }
    }

    /// Bind a dedicated handler for one action kind.
    #[must_use]
    pub fn with(mut self, kind: ActionKind, handler: Callback<()>) -> Self {
        self.overrides.insert(kind, handler);
        self
    }

    /// Zero-argument callback to attach to the button for `kind`.
    #[must_use]
    pub fn bind(&self, kind: ActionKind) -> Callback<()> {
        self.overrides
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| self.fallback.reform(move |()| kind))
    }
}

/// A labelled, icon-bearing button bound to its handler.
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    /// Which action this is.
    pub kind: ActionKind,
    /// Display label, unique within its table.
    pub label: &'static str,
    /// Glyph reference for the icon provider.
    pub icon: IconKind,
    /// Invoked once per activation.
    pub handler: Callback<()>,
}

/// Build the panel's actions for `role`, in table order.
#[must_use]
pub fn actions_for(role: Role, handlers: &ActionHandlers) -> Vec<Action> {
    role_actions(role)
        .iter()
        .map(|&kind| Action {
            kind,
            label: kind.label(),
            icon: kind.icon(),
            handler: handlers.bind(kind),
        })
        .collect()
}

/// Build the panel's actions straight from a role claim.
#[must_use]
pub fn actions_for_claim(claim: &str, handlers: &ActionHandlers) -> Vec<Action> {
    actions_for(Role::from_claim(claim), handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn recording_handlers() -> (ActionHandlers, Rc<RefCell<Vec<ActionKind>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let handlers = ActionHandlers::new(Callback::from(move |kind| {
            sink.borrow_mut().push(kind);
        }));
        (handlers, log)
    }

    fn labels(actions: &[Action]) -> Vec<&'static str> {
        actions.iter().map(|action| action.label).collect()
    }

    #[test]
    fn landlord_panel_lists_fixed_actions() {
        let (handlers, _) = recording_handlers();
        let actions = actions_for_claim("Landlord", &handlers);
        assert_eq!(
            labels(&actions),
            ["Add Property", "Add Tenant", "Generate Report", "Filter View"]
        );
    }

    #[test]
    fn admin_panel_lists_fixed_actions() {
        let (handlers, _) = recording_handlers();
        let actions = actions_for_claim("Admin", &handlers);
        assert_eq!(
            labels(&actions),
            ["Manage Users", "System Settings", "View Reports", "Audit Log"]
        );
    }

    #[test]
    fn unrecognised_claims_get_tenant_actions() {
        let (handlers, _) = recording_handlers();
        let tenant = labels(&actions_for(Role::Tenant, &handlers));
        assert_eq!(
            tenant,
            ["Pay Rent", "Request Maintenance", "View Lease", "Contact Landlord"]
        );
        for claim in ["", "admin", "landlord", "Tenant", "superuser"] {
            assert_eq!(labels(&actions_for_claim(claim, &handlers)), tenant);
        }
        assert_eq!(
            labels(&actions_for(Role::from_optional_claim(None), &handlers)),
            tenant
        );
    }

    #[test]
    fn every_table_has_four_unique_labels() {
        for role in Role::all() {
            let table = role_actions(role);
            let unique: HashSet<_> = table.iter().map(|kind| kind.label()).collect();
            assert_eq!(unique.len(), ACTIONS_PER_ROLE, "{role}");
        }
    }

    #[test]
    fn activating_nth_action_invokes_only_its_handler() {
        for role in Role::all() {
            for index in 0..ACTIONS_PER_ROLE {
                let (handlers, log) = recording_handlers();
                let actions = actions_for(role, &handlers);
                actions[index].handler.emit(());
                assert_eq!(*log.borrow(), vec![role_actions(role)[index]]);
            }
        }
    }

    #[test]
    fn bound_override_replaces_fallback() {
        let (handlers, log) = recording_handlers();
        let hits = Rc::new(RefCell::new(0_u32));
        let counter = Rc::clone(&hits);
        let handlers = handlers.with(
            ActionKind::AddTenant,
            Callback::from(move |()| *counter.borrow_mut() += 1),
        );
        let actions = actions_for(Role::Landlord, &handlers);

        actions[1].handler.emit(());
        assert_eq!(*hits.borrow(), 1);
        assert!(log.borrow().is_empty());

        actions[3].handler.emit(());
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(*log.borrow(), vec![ActionKind::FilterView]);
    }

    #[test]
    fn icons_follow_action_kind() {
        let (handlers, _) = recording_handlers();
        let icons: Vec<_> = actions_for(Role::Landlord, &handlers)
            .iter()
            .map(|action| action.icon)
            .collect();
        assert_eq!(
            icons,
            [
                IconKind::Building,
                IconKind::UserPlus,
                IconKind::FileText,
                IconKind::Filter
            ]
        );
    }
}
