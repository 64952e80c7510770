// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Playlist session view-model.
//!
//! A [`Session`] is an immutable snapshot of everything the player knows
//! about the catalog: the fetched songs, the loading status, the active tab,
//! the search text, the selected song and whether the list panel is shown.
//!
//! Every change is expressed as an [`Intent`] and applied with
//! [`Session::update`], which consumes the snapshot and returns the next one.
//! The visible list is never stored, it is derived on demand by
//! [`Session::visible`] from the pure filters in this module.

use std::sync::Arc;

use crate::model::{Song, SongId, Tab, catalog::CatalogStatus};

/// A user or system event applied to the session.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Intent {
    FetchStarted,
    CatalogLoaded(Vec<Song>),
    CatalogFailed(String),

    SetTab(Tab),
    SetSearchText(String),
    SelectSong(SongId),

    Next,
    Previous,

    ToggleListVisibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Next,
    Previous,
}

#[derive(Debug, Clone)]
pub(crate) struct Session {
    catalog: Arc<[Song]>,
    status: CatalogStatus,
    tab: Tab,
    search_text: String,
    selection: Option<SongId>,
    list_visible: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            catalog: Arc::from(Vec::new()),
            status: CatalogStatus::Idle,
            tab: Tab::default(),
            search_text: String::new(),
            selection: None,
            list_visible: true,
        }
    }
}

impl Session {
    /// Applies an intent, producing the next snapshot.
    #[must_use]
    pub(crate) fn update(self, intent: Intent) -> Self {
        match intent {
            Intent::FetchStarted => {
                if self.status.can_fetch() {
                    Self {
                        status: CatalogStatus::Loading,
                        ..self
                    }
                } else {
                    self
                }
            }

            Intent::CatalogLoaded(songs) => {
                let catalog: Arc<[Song]> = Arc::from(songs);
                // A reload may drop the selected song
                let selection = self
                    .selection
                    .filter(|id| catalog.iter().any(|s| s.id == *id));

                Self {
                    catalog,
                    status: CatalogStatus::Ready,
                    selection,
                    ..self
                }
            }

            Intent::CatalogFailed(message) => Self {
                catalog: Arc::from(Vec::new()),
                status: CatalogStatus::Failed(message),
                selection: None,
                ..self
            },

            Intent::SetTab(tab) => Self { tab, ..self },

            Intent::SetSearchText(text) => Self {
                search_text: text.to_lowercase(),
                ..self
            },

            Intent::SelectSong(id) => {
                if self.song(id).is_some() {
                    Self {
                        selection: Some(id),
                        ..self
                    }
                } else {
                    self
                }
            }

            Intent::Next => self.step(Step::Next),
            Intent::Previous => self.step(Step::Previous),

            Intent::ToggleListVisibility => Self {
                list_visible: !self.list_visible,
                ..self
            },
        }
    }

    fn step(self, step: Step) -> Self {
        let next = neighbour(&self.visible(), self.selection, step);

        match next {
            Some(id) => Self {
                selection: Some(id),
                ..self
            },
            None => self,
        }
    }

    /// The tab-filtered, then search-filtered, subset of the catalog.
    pub(crate) fn visible(&self) -> Vec<&Song> {
        filter_by_search(filter_by_tab(&self.catalog, self.tab), &self.search_text)
    }

    pub(crate) fn catalog(&self) -> &[Song] {
        &self.catalog
    }

    pub(crate) fn song(&self, id: SongId) -> Option<&Song> {
        self.catalog.iter().find(|s| s.id == id)
    }

    pub(crate) fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub(crate) fn tab(&self) -> Tab {
        self.tab
    }

    pub(crate) fn search_text(&self) -> &str {
        &self.search_text
    }

    pub(crate) fn selection(&self) -> Option<SongId> {
        self.selection
    }

    pub(crate) fn selected_song(&self) -> Option<&Song> {
        self.selection.and_then(|id| self.song(id))
    }

    pub(crate) fn list_visible(&self) -> bool {
        self.list_visible
    }
}

pub(crate) fn filter_by_tab(songs: &[Song], tab: Tab) -> Vec<&Song> {
    songs
        .iter()
        .filter(|song| match tab {
            Tab::ForYou => true,
            Tab::TopTracks => song.top_track,
        })
        .collect()
}

pub(crate) fn filter_by_search<'a>(songs: Vec<&'a Song>, text: &str) -> Vec<&'a Song> {
    let needle = text.to_lowercase();
    songs.into_iter().filter(|song| song.matches(&needle)).collect()
}

/// Picks the song after (or before) `current` in `visible`, wrapping at
/// either end.
///
/// When `current` is not in `visible` the first visible song is chosen for
/// both directions. Returns `None` only when `visible` is empty.
pub(crate) fn neighbour(visible: &[&Song], current: Option<SongId>, step: Step) -> Option<SongId> {
    let len = visible.len();
    if len == 0 {
        return None;
    }

    let position = current.and_then(|id| visible.iter().position(|s| s.id == id));

    let index = match (position, step) {
        (Some(i), Step::Next) => (i + 1) % len,
        (Some(i), Step::Previous) => (i + len - 1) % len,
        (None, _) => 0,
    };

    Some(visible[index].id)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::test_support::song;

    fn names(songs: &[&Song]) -> Vec<String> {
        songs.iter().map(|s| s.name.clone()).collect()
    }

    fn alpha_beta() -> Session {
        Session::default()
            .update(Intent::FetchStarted)
            .update(Intent::CatalogLoaded(vec![
                song(1, "Alpha", "A", true),
                song(2, "Beta", "B", false),
            ]))
    }

    fn ready(songs: Vec<Song>) -> Session {
        Session::default()
            .update(Intent::FetchStarted)
            .update(Intent::CatalogLoaded(songs))
    }

    #[test]
    fn new_session_is_idle_with_defaults() {
        let session = Session::default();
        assert_eq!(session.status(), &CatalogStatus::Idle);
        assert_eq!(session.tab(), Tab::ForYou);
        assert_eq!(session.search_text(), "");
        assert_eq!(session.selection(), None);
        assert!(session.list_visible());
        assert!(session.visible().is_empty());
    }

    #[test]
    fn fetch_started_enters_loading() {
        let session = Session::default().update(Intent::FetchStarted);
        assert!(session.status().is_loading());
    }

    #[test]
    fn empty_catalog_is_still_ready() {
        let session = ready(vec![]);
        assert_eq!(session.status(), &CatalogStatus::Ready);
        assert!(session.visible().is_empty());
    }

    #[test]
    fn tab_and_search_scenario() {
        let session = alpha_beta().update(Intent::SetTab(Tab::TopTracks));
        assert_eq!(names(&session.visible()), ["Alpha"]);

        let session = session.update(Intent::SetTab(Tab::ForYou));
        assert_eq!(names(&session.visible()), ["Alpha", "Beta"]);

        let session = session.update(Intent::SetSearchText("bet".to_string()));
        assert_eq!(names(&session.visible()), ["Beta"]);
    }

    #[test]
    fn search_text_is_lower_cased() {
        let session = alpha_beta().update(Intent::SetSearchText("BeT".to_string()));
        assert_eq!(session.search_text(), "bet");
        assert_eq!(names(&session.visible()), ["Beta"]);
    }

    #[test]
    fn search_matches_artist() {
        let session = ready(vec![
            song(1, "Intro", "The xx", false),
            song(2, "Outro", "M83", false),
        ])
        .update(Intent::SetSearchText("m8".to_string()));
        assert_eq!(names(&session.visible()), ["Outro"]);
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let session = alpha_beta()
            .update(Intent::SelectSong(SongId(2)))
            .update(Intent::Next);
        assert_eq!(session.selection(), Some(SongId(1)));
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let session = alpha_beta()
            .update(Intent::SelectSong(SongId(1)))
            .update(Intent::Previous);
        assert_eq!(session.selection(), Some(SongId(2)));
    }

    #[test]
    fn navigation_on_empty_visible_list_is_a_no_op() {
        let session = alpha_beta()
            .update(Intent::SelectSong(SongId(2)))
            .update(Intent::SetSearchText("nothing matches".to_string()));

        let session = session.update(Intent::Next).update(Intent::Previous);
        assert_eq!(session.selection(), Some(SongId(2)));
    }

    #[test]
    fn tab_switch_keeps_selection() {
        let session = alpha_beta()
            .update(Intent::SelectSong(SongId(2)))
            .update(Intent::SetTab(Tab::TopTracks));
        assert_eq!(session.selection(), Some(SongId(2)));
        assert_eq!(names(&session.visible()), ["Alpha"]);
    }

    #[test]
    fn selection_outside_visible_list_moves_to_first_in_both_directions() {
        let songs = vec![
            song(1, "One", "A", true),
            song(2, "Two", "B", true),
            song(3, "Three", "C", true),
            song(4, "Four", "D", false),
        ];
        let hidden = ready(songs)
            .update(Intent::SelectSong(SongId(4)))
            .update(Intent::SetTab(Tab::TopTracks));

        let next = hidden.clone().update(Intent::Next);
        assert_eq!(next.selection(), Some(SongId(1)));

        let previous = hidden.update(Intent::Previous);
        assert_eq!(previous.selection(), Some(SongId(1)));
    }

    #[test]
    fn navigation_without_selection_starts_at_first() {
        let session = alpha_beta().update(Intent::Previous);
        assert_eq!(session.selection(), Some(SongId(1)));
    }

    #[test]
    fn selecting_unknown_song_is_ignored() {
        let session = alpha_beta()
            .update(Intent::SelectSong(SongId(1)))
            .update(Intent::SelectSong(SongId(99)));
        assert_eq!(session.selection(), Some(SongId(1)));
    }

    #[test]
    fn selecting_a_hidden_song_is_allowed() {
        let session = alpha_beta()
            .update(Intent::SetTab(Tab::TopTracks))
            .update(Intent::SelectSong(SongId(2)));
        assert_eq!(session.selected_song().map(|s| s.name.as_str()), Some("Beta"));
    }

    #[test]
    fn fetch_failure_is_terminal_and_empty() {
        let session = Session::default()
            .update(Intent::FetchStarted)
            .update(Intent::CatalogFailed("connection refused".to_string()));

        assert_eq!(session.status().error(), Some("connection refused"));
        assert!(session.visible().is_empty());

        let session = session.update(Intent::SelectSong(SongId(1))).update(Intent::Next);
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn fetch_started_is_ignored_while_loading() {
        let session = Session::default()
            .update(Intent::FetchStarted)
            .update(Intent::FetchStarted);
        assert!(session.status().is_loading());
    }

    #[test]
    fn reload_keeps_selection_only_when_still_present() {
        let session = alpha_beta().update(Intent::SelectSong(SongId(2)));

        let kept = session
            .clone()
            .update(Intent::FetchStarted)
            .update(Intent::CatalogLoaded(vec![song(2, "Beta", "B", false)]));
        assert_eq!(kept.selection(), Some(SongId(2)));

        let dropped = session
            .update(Intent::FetchStarted)
            .update(Intent::CatalogLoaded(vec![song(3, "Gamma", "C", false)]));
        assert_eq!(dropped.selection(), None);
    }

    #[test]
    fn toggle_list_visibility_flips() {
        let session = alpha_beta().update(Intent::ToggleListVisibility);
        assert!(!session.list_visible());
        assert!(session.update(Intent::ToggleListVisibility).list_visible());
    }

    fn catalog_strategy() -> impl Strategy<Value = Vec<Song>> {
        prop::collection::vec(("[A-Za-z ]{1,12}", "[A-Za-z]{1,8}", any::<bool>()), 0..30).prop_map(
            |entries| {
                entries
                    .into_iter()
                    .enumerate()
                    .map(|(i, (name, artist, top))| song(i as i64, &name, &artist, top))
                    .collect()
            },
        )
    }

    fn tab_strategy() -> impl Strategy<Value = Tab> {
        prop_oneof![Just(Tab::ForYou), Just(Tab::TopTracks)]
    }

    proptest! {
        #[test]
        fn tab_filter_keeps_exactly_the_matching_songs(songs in catalog_strategy(), tab in tab_strategy()) {
            let filtered = filter_by_tab(&songs, tab);
            match tab {
                Tab::ForYou => prop_assert_eq!(filtered.len(), songs.len()),
                Tab::TopTracks => {
                    prop_assert!(filtered.iter().all(|s| s.top_track));
                    prop_assert_eq!(filtered.len(), songs.iter().filter(|s| s.top_track).count());
                }
            }
        }

        #[test]
        fn visible_list_is_a_matching_subset(
            songs in catalog_strategy(),
            tab in tab_strategy(),
            text in "[A-Za-z]{0,3}",
        ) {
            let session = ready(songs)
                .update(Intent::SetTab(tab))
                .update(Intent::SetSearchText(text.clone()));
            let needle = text.to_lowercase();
            let by_tab = filter_by_tab(session.catalog(), tab);

            for s in session.visible() {
                prop_assert!(
                    s.name.to_lowercase().contains(&needle) || s.artist.to_lowercase().contains(&needle)
                );
                prop_assert!(by_tab.iter().any(|t| t.id == s.id));
            }
        }

        #[test]
        fn next_then_previous_returns_to_start(songs in catalog_strategy(), pick in any::<prop::sample::Index>()) {
            prop_assume!(songs.len() > 1);
            let start = songs[pick.index(songs.len())].id;
            let session = ready(songs).update(Intent::SelectSong(start));

            let forth_back = session.clone().update(Intent::Next).update(Intent::Previous);
            prop_assert_eq!(forth_back.selection(), Some(start));

            let back_forth = session.update(Intent::Previous).update(Intent::Next);
            prop_assert_eq!(back_forth.selection(), Some(start));
        }

        #[test]
        fn single_visible_song_is_a_fixed_point(name in "[A-Za-z]{1,8}") {
            let session = ready(vec![song(7, &name, "Solo", false)]).update(Intent::SelectSong(SongId(7)));
            let session = session.update(Intent::Next);
            prop_assert_eq!(session.selection(), Some(SongId(7)));
            let session = session.update(Intent::Previous);
            prop_assert_eq!(session.selection(), Some(SongId(7)));
        }
    }
}
