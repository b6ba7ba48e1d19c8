/// A user intent, decoded from terminal input by [`crate::input::map_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Tick,
    Resize,
    Quit,

    // Navigation
    MoveUp,
    MoveDown,
    GoTop,
    GoBottom,
    CycleFocus,
    /// Enter: select the result under the cursor, or add the rated title.
    DrillIn,
    /// Esc: close the detail view or leave the search box.
    NavigateBack,

    // Search box
    FocusSearch,
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    SearchConfirm,

    // Rating
    SetRating(u8),
    HoverNext,
    HoverPrev,
    CommitHover,
    AddWatched,

    // Watched list
    DeleteWatched,

    // Layout
    ToggleResultsPanel,
    ToggleSidePanel,
    TogglePlot,
    ToggleHelp,
}
