/// What the frame loop does when the page is hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageHideAction {
    /// Page is entering the back/forward cache and may be shown again.
    Keep,
    /// Page is being unloaded for good.
    Stop,
}

#[inline]
pub fn page_hide_action(persisted: bool, running: bool) -> PageHideAction {
    if persisted || !running {
        PageHideAction::Keep
    } else {
        PageHideAction::Stop
    }
}
