use std::{cell::RefCell, rc::Rc};

use dcampaigner_shared::{Client, ClientId};
use web_sys::{FileList, ScrollBehavior, ScrollToOptions, Url};
use yew::{platform::spawn_local, prelude::*};
use yew_router::prelude::use_location;

use crate::{
    api, logger,
    store::{campaigns::fetch_campaigns, AuthContext, CampaignsContext, UiAction, UiContext},
};

/// Preview URLs in display order. Updates go through actions so batches
/// queued within one render all land.
#[derive(Debug, Default, PartialEq)]
struct UrlList(Vec<String>);

enum UrlListAction {
    Append(Vec<String>),
    Drop(String),
}

impl Reducible for UrlList {
    type Action = UrlListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            UrlListAction::Append(urls) => next.extend(urls),
            UrlListAction::Drop(url) => next.retain(|u| *u != url),
        }
        Rc::new(UrlList(next))
    }
}

/// Browser object URLs created for locally picked image files.
///
/// Every URL handed out is revoked when it is removed and, for the ones
/// still listed, when the component unmounts.
#[derive(Clone)]
pub struct ObjectUrlsHandle {
    urls: UseReducerHandle<UrlList>,
    live: Rc<RefCell<Vec<String>>>,
}

impl ObjectUrlsHandle {
    pub fn urls(&self) -> &[String] {
        &self.urls.0
    }

    /// Creates one URL per file and appends them. Returns the new URLs.
    pub fn add_files(&self, files: &FileList) -> Vec<String> {
        let mut added = Vec::new();
        for index in 0..files.length() {
            let Some(file) = files.get(index) else {
                continue;
            };
            match Url::create_object_url_with_blob(&file) {
                Ok(url) => added.push(url),
                Err(e) => logger::warn(&format!("Could not preview {}: {e:?}", file.name())),
            }
        }
        if !added.is_empty() {
            self.live.borrow_mut().extend(added.iter().cloned());
            self.urls.dispatch(UrlListAction::Append(added.clone()));
        }
        added
    }

    pub fn remove(&self, index: usize) {
        let Some(url) = self.urls.0.get(index).cloned() else {
            return;
        };
        revoke(&url);
        self.live.borrow_mut().retain(|live| *live != url);
        self.urls.dispatch(UrlListAction::Drop(url));
    }
}

fn revoke(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        logger::warn(&format!("Could not revoke {url}: {e:?}"));
    }
}

#[hook]
pub fn use_object_urls() -> ObjectUrlsHandle {
    let urls = use_reducer(UrlList::default);
    let live = use_mut_ref(Vec::<String>::new);

    {
        let live = live.clone();
        use_effect_with((), move |_| {
            move || {
                for url in live.borrow_mut().drain(..) {
                    revoke(&url);
                }
            }
        });
    }

    ObjectUrlsHandle {
        urls,
        live,
    }
}

/// The campaigns slice, refetched for `client_id` on mount and whenever the
/// scope changes. `None` outside a store provider.
#[hook]
pub fn use_campaigns(client_id: Option<ClientId>) -> Option<CampaignsContext> {
    let campaigns = use_context::<CampaignsContext>();

    {
        let campaigns = campaigns.clone();
        use_effect_with(client_id, move |client_id| {
            if let Some(campaigns) = campaigns {
                spawn_local(fetch_campaigns(campaigns, *client_id));
            }
            || ()
        });
    }

    campaigns
}

/// Client a page is limited to: the one in the route, else the signed-in
/// client user's own.
#[hook]
pub fn use_page_scope(route_scope: Option<ClientId>) -> Option<ClientId> {
    let auth = use_context::<AuthContext>();
    match auth {
        Some(auth) => auth.scope_for(route_scope),
        None => route_scope,
    }
}

/// Client list loaded once on mount. Pages own the list; a failed load is
/// reported through the ui slice.
#[hook]
pub fn use_clients() -> UseStateHandle<Vec<Client>> {
    let clients = use_state(Vec::<Client>::new);
    let ui = use_context::<UiContext>();

    {
        let clients = clients.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::fetch_clients().await {
                    Ok(items) => clients.set(items),
                    Err(e) => {
                        logger::error(&format!("Failed to fetch clients: {e}"));
                        if let Some(ui) = ui {
                            ui.dispatch(UiAction::SetError(Some(e)));
                        }
                    },
                }
            });
            || ()
        });
    }

    clients
}

/// Scrolls the viewport to the top whenever the current route changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(list: UrlList, action: UrlListAction) -> UrlList {
        UrlList(Rc::new(list).reduce(action).0.clone())
    }

    #[test]
    fn batches_in_one_render_are_all_kept() {
        let list = reduce(UrlList::default(), UrlListAction::Append(vec!["blob:a".into()]));
        let list = reduce(list, UrlListAction::Append(vec!["blob:b".into(), "blob:c".into()]));
        assert_eq!(list.0, vec!["blob:a", "blob:b", "blob:c"]);
    }

    #[test]
    fn drop_removes_by_url() {
        let list = UrlList(vec!["blob:a".into(), "blob:b".into()]);
        let list = reduce(list, UrlListAction::Drop("blob:a".into()));
        assert_eq!(list.0, vec!["blob:b"]);
        let list = reduce(list, UrlListAction::Drop("blob:zzz".into()));
        assert_eq!(list.0, vec!["blob:b"]);
    }
}
