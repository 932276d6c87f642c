//! # Article Handler
//!
//! Paginated reading list with search. `load_articles` and `search` share one slot,
//! so switching between browsing and searching drops the stale request.

use lib_core::model::{Article, Page};
use lib_utils::validation::validate_not_empty;
use tokio::task::JoinHandle;
use tokio_util::sync::DropGuard;

use super::{scoped, Screen};
use crate::app::holder::StateHolder;
use crate::app::state::ArticleState;
use crate::repository::ArticleRepository;
use crate::services::api::ApiClient;

pub const PAGE_SIZE: u32 = 10;

pub struct ArticleHandler {
    holder: StateHolder<ArticleState>,
    repo: ArticleRepository,
    _guard: DropGuard,
}

impl Screen for ArticleHandler {
    type State = ArticleState;

    fn holder(&self) -> &StateHolder<ArticleState> {
        &self.holder
    }
}

fn show_page(state: &mut ArticleState, page: Page<Article>) {
    state.page = page.page;
    state.total_pages = page.total_pages.max(1);
    state.articles = page.items;
    state.status.succeed(None);
}

impl ArticleHandler {
    pub fn new(api: &ApiClient) -> Self {
        let (holder, guard) = scoped::<ArticleState>();
        Self {
            holder,
            repo: ArticleRepository::new(api.clone()),
            _guard: guard,
        }
    }

    /// Browse page `page` (1-based) and leave search mode.
    pub fn load_articles(&self, page: u32) -> JoinHandle<()> {
        let page = page.max(1);
        let repo = self.repo.clone();
        self.holder.update(|state| {
            state.status.begin();
            state.query = None;
        });

        self.holder.launch_exclusive("articles", move |task| async move {
            match repo.list(page, PAGE_SIZE).await {
                Ok(found) => task.update(|state| show_page(state, found)),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

    /// First page of results for `query`.
    pub fn search(&self, query: &str) -> JoinHandle<()> {
        let query = query.trim().to_string();
        let repo = self.repo.clone();
        self.holder.update(|state| {
            state.status.begin();
            state.query = Some(query.clone());
        });

        self.holder.launch_exclusive("articles", move |task| async move {
            if let Err(message) = validate_not_empty(&query, "Kata kunci") {
                task.update(|state| state.status.fail_with(message));
                return;
            }

            match repo.search(&query, 1, PAGE_SIZE).await {
                Ok(found) => task.update(|state| show_page(state, found)),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

    /// Fetch one article in full into `selected`.
    pub fn open(&self, id: &str) -> JoinHandle<()> {
        let id = id.to_string();
        let repo = self.repo.clone();
        self.holder.update(|state| state.status.begin());

        self.holder.launch_exclusive("article", move |task| async move {
            match repo.get(&id).await {
                Ok(article) => task.update(|state| {
                    state.selected = Some(article);
                    state.status.succeed(None);
                }),
                Err(e) => task.update(|state| state.status.fail(&e)),
            };
        })
    }

    pub fn close_article(&self) {
        self.holder.update(|state| state.selected = None);
    }
}
