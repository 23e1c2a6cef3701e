//! Discovery of drawer parts in the document.
//!
//! Binding runs once per root present when it is called. Roots or triggers
//! added to the document afterwards are not picked up.

use crate::drawer::Drawer;
use crate::settings::DrawerSettings;
use drawer_core::{BindError, DrawerHost, NodeList, Role, Scheduler, ROLE_ATTRIBUTE};
use std::rc::Rc;

/// The structural elements of one drawer.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerParts<N> {
    pub root: N,
    pub id: Option<String>,
    pub backdrop: N,
    pub container: N,
    /// Scrollable content region; scroll arbitration stops here.
    pub content: Option<N>,
    pub triggers: NodeList<N>,
}

/// Locate the parts of the drawer rooted at `root`.
///
/// Backdrop and container are required. A root without an id binds, but
/// nothing can trigger it.
pub fn bind_parts<H: DrawerHost>(
    host: &H,
    root: &H::Node,
) -> Result<DrawerParts<H::Node>, BindError> {
    let id = host.element_id(root);
    let label = id.clone().unwrap_or_else(|| format!("{root:?}"));

    if host.attribute(root, ROLE_ATTRIBUTE).as_deref() != Some(Role::Drawer.marker()) {
        return Err(BindError::NotADrawer { root: label });
    }

    let require = |role: Role| {
        host.find_part(root, role).ok_or_else(|| BindError::MissingPart {
            root: label.clone(),
            role,
        })
    };
    let backdrop = require(Role::Backdrop)?;
    let container = require(Role::Container)?;

    let content = host.find_part(root, Role::Content);
    if content.is_none() {
        log::debug!("drawer '{label}' has no content region; arbitration stops at the root");
    }

    let triggers = match &id {
        Some(id) => host.find_triggers(id),
        None => {
            log::warn!("drawer root {root:?} has no id; no trigger can open it");
            NodeList::new()
        }
    };

    Ok(DrawerParts {
        root: root.clone(),
        id,
        backdrop,
        container,
        content,
        triggers,
    })
}

/// Bind every drawer root in the document.
///
/// Roots with broken markup are logged and skipped; the others still bind.
pub fn bind_all<H>(
    host: &Rc<H>,
    scheduler: &Rc<dyn Scheduler>,
    settings: &DrawerSettings,
) -> Vec<Drawer<H>>
where
    H: DrawerHost + 'static,
{
    host.drawer_roots()
        .into_iter()
        .filter_map(|root| {
            match Drawer::bind(Rc::clone(host), Rc::clone(scheduler), root, settings) {
                Ok(drawer) => Some(drawer),
                Err(err) => {
                    log::error!("skipping drawer: {err}");
                    None
                }
            }
        })
        .collect()
}
