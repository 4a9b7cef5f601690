use desktop_app_contract::{AppMountContext, AppServices};
use leptos::*;

/// Path shown in the location bar; the listing is not backed by a filesystem.
pub const HOME_PATH: &str = "/home/user";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

impl EntryKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Folder => "Folder",
            Self::File => "File",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileEntry {
    pub name: &'static str,
    pub kind: EntryKind,
}

const fn folder(name: &'static str) -> FileEntry {
    FileEntry {
        name,
        kind: EntryKind::Folder,
    }
}

const fn file(name: &'static str) -> FileEntry {
    FileEntry {
        name,
        kind: EntryKind::File,
    }
}

pub const HOME_ENTRIES: [FileEntry; 8] = [
    folder("Documents"),
    folder("Downloads"),
    folder("Pictures"),
    folder("Music"),
    folder("Videos"),
    file("readme.txt"),
    file("notes.txt"),
    file("config.json"),
];

fn status_text(selected: Option<usize>) -> String {
    selected
        .and_then(|idx| HOME_ENTRIES.get(idx))
        .map(|entry| format!("Selected: {} ({})", entry.name, entry.kind.label()))
        .unwrap_or_else(|| "Ready".to_string())
}

pub fn mount(context: AppMountContext) -> View {
    view! { <FilesApp services=context.services /> }.into_view()
}

#[component]
pub fn FilesApp(services: AppServices) -> impl IntoView {
    let selected_row = create_rw_signal::<Option<usize>>(None);
    let palette = move || services.theme.palette();

    view! {
        <div
            class="app-shell app-files-shell"
            style=move || format!("background:{};color:{};", palette().window, palette().text)
        >
            <div
                class="files-pathbar"
                style=move || format!("border-bottom:1px solid {};", palette().border)
            >
                <div
                    class="files-path"
                    style=move || format!("background:{};color:{};", palette().desktop, palette().muted)
                >
                    {HOME_PATH}
                </div>
            </div>

            <div class="files-grid" role="listbox" aria-label="Home folder">
                <For each=move || 0..HOME_ENTRIES.len() key=|idx| *idx let:idx>
                    <FileTile idx=idx entry=HOME_ENTRIES[idx] selected_row=selected_row services=services />
                </For>
            </div>

            <div class="app-statusbar">
                <span>{format!("{} item(s)", HOME_ENTRIES.len())}</span>
                <span>{move || status_text(selected_row.get())}</span>
            </div>
        </div>
    }
}

#[component]
fn FileTile(
    idx: usize,
    entry: FileEntry,
    selected_row: RwSignal<Option<usize>>,
    services: AppServices,
) -> impl IntoView {
    let is_selected = Signal::derive(move || selected_row.get() == Some(idx));
    let theme = services.theme;
    let icon = move || match entry.kind {
        EntryKind::Folder => {
            let accent = theme.accent.get().hex();
            view! {
                <svg width="40" height="40" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                    <path
                        d="M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z"
                        fill=accent
                        stroke=accent
                        stroke-width="2"
                    ></path>
                </svg>
            }
            .into_view()
        }
        EntryKind::File => {
            let muted = theme.palette().muted;
            view! {
                <svg width="40" height="40" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                    <path
                        d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"
                        stroke=muted
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    ></path>
                    <path
                        d="M14 2v6h6"
                        stroke=muted
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    ></path>
                </svg>
            }
            .into_view()
        }
    };

    view! {
        <button
            type="button"
            role="option"
            aria-selected=move || is_selected.get().to_string()
            class=move || if is_selected.get() { "files-tile selected" } else { "files-tile" }
            style=move || {
                if is_selected.get() {
                    format!("background:{};", theme.palette().hover)
                } else {
                    String::new()
                }
            }
            on:mousedown=move |_| selected_row.set(Some(idx))
        >
            {icon}
            <span class="files-tile-name">{entry.name}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn home_listing_has_five_folders_then_three_files() {
        let kinds = HOME_ENTRIES.map(|entry| entry.kind);
        assert_eq!(&kinds[..5], &[EntryKind::Folder; 5]);
        assert_eq!(&kinds[5..], &[EntryKind::File; 3]);
        assert_eq!(HOME_ENTRIES[7].name, "config.json");
    }

    #[test]
    fn status_reflects_selection() {
        assert_eq!(status_text(None), "Ready");
        assert_eq!(status_text(Some(1)), "Selected: Downloads (Folder)");
        assert_eq!(status_text(Some(6)), "Selected: notes.txt (File)");
        assert_eq!(status_text(Some(42)), "Ready");
    }
}
