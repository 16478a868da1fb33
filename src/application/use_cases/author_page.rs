use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::application::{
    AuthService, FollowNamespaceUseCase, ListingService, Navigator, PreferencesService, RouteData,
    NOT_FOUND_PATH,
};
use crate::domain::{
    normalize_response, page_header, prepare_namespace, AppliedFilter, Clock, DomainError,
    FollowState, FollowStatus, ItemEnricher, ListItem, ListingPage, Namespace, PageHeader,
    QueryParams, QueryState, SystemClock, ToolbarConfig,
};

/// Collaborators of the author page.
#[derive(Clone)]
pub struct AuthorPageServices {
    pub listing: Arc<dyn ListingService>,
    pub auth: Arc<dyn AuthService>,
    pub preferences: Arc<dyn PreferencesService>,
    pub navigator: Arc<dyn Navigator>,
    pub clock: Arc<dyn Clock>,
}

impl AuthorPageServices {
    pub fn new(
        listing: Arc<dyn ListingService>,
        auth: Arc<dyn AuthService>,
        preferences: Arc<dyn PreferencesService>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            listing,
            auth,
            preferences,
            navigator,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

pub enum OpenOutcome {
    Ready(Arc<AuthorPageUseCase>),
    /// The namespace could not be resolved; a not-found navigation was emitted.
    NotFound,
}

/// What happened to a query change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was applied to the page.
    Applied,
    /// A newer query was issued while this one was pending; its response was dropped.
    Superseded,
    /// The change was a no-op and nothing was fetched.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub page_size: u32,
    pub page_number: u32,
    pub total_items: u64,
}

/// Immutable snapshot of everything the rendering layer needs.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorView {
    pub namespace: Namespace,
    pub header: PageHeader,
    pub toolbar: ToolbarConfig,
    pub query: QueryState,
    pub applied_filters: Vec<AppliedFilter>,
    pub listing: ListingPage,
    pub results_count: u64,
    pub pagination: PaginationView,
    pub loading: bool,
    pub follow: FollowStatus,
}

#[derive(Debug)]
struct PageState {
    query: QueryState,
    applied_filters: Vec<AppliedFilter>,
    listing: ListingPage,
    loading: bool,
}

/// A query installed on the page whose response is still outstanding.
struct PendingQuery {
    generation: u64,
    params: QueryParams,
    previous_query: QueryState,
    previous_filters: Vec<AppliedFilter>,
}

/// Controller of one author page view, from entry to navigation away.
///
/// Every query change bumps a request generation; a response is applied only
/// if no later query was issued while it was in flight.
pub struct AuthorPageUseCase {
    services: AuthorPageServices,
    enricher: ItemEnricher,
    toolbar: ToolbarConfig,
    namespace: Namespace,
    header: PageHeader,
    state: Mutex<PageState>,
    generation: AtomicU64,
    follow: FollowNamespaceUseCase,
}

impl AuthorPageUseCase {
    pub fn open(services: AuthorPageServices, route: RouteData) -> Result<OpenOutcome, DomainError> {
        let namespace = match route.namespace {
            Some(namespace) if namespace.has_name() => namespace,
            _ => {
                info!("Author not found, redirecting to {}", NOT_FOUND_PATH);
                services.navigator.navigate(NOT_FOUND_PATH);
                return Ok(OpenOutcome::NotFound);
            }
        };

        let namespace = prepare_namespace(namespace);
        let header = page_header(&namespace);
        let enricher = ItemEnricher::with_clock(services.clock.clone());

        let mut listing = normalize_response(route.content)?;
        listing.repositories = enricher.enrich_all(listing.repositories);

        debug!(
            "Opened author page for {} ({} repositories, {} collections)",
            namespace.name, listing.repository_count, listing.collection_count
        );

        let follow = FollowNamespaceUseCase::new(namespace.id, services.preferences.clone());

        Ok(OpenOutcome::Ready(Arc::new(Self {
            services,
            enricher,
            toolbar: ToolbarConfig::author_page(),
            namespace,
            header,
            state: Mutex::new(PageState {
                query: QueryState::default(),
                applied_filters: Vec::new(),
                listing,
                loading: false,
            }),
            generation: AtomicU64::new(0),
            follow,
        })))
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn view(&self) -> AuthorView {
        let state = self.state();
        AuthorView {
            namespace: self.namespace.clone(),
            header: self.header.clone(),
            toolbar: self.toolbar.clone(),
            query: state.query.clone(),
            applied_filters: state.applied_filters.clone(),
            listing: state.listing.clone(),
            results_count: state.listing.results_count(),
            pagination: PaginationView {
                page_size: state.query.page_size(),
                page_number: state.query.page_number(),
                total_items: state.listing.total_items(),
            },
            loading: state.loading,
            follow: self.follow.status(),
        }
    }

    /// Loads the visitor's preferences when signed in and derives the follow
    /// state. Independent of the listing; the page renders without it.
    pub async fn sync_follow_state(&self) -> Result<FollowStatus, DomainError> {
        let me = self.services.auth.me().await?;
        if !me.authenticated {
            debug!("Anonymous visitor, follow button disabled");
            return Ok(self.follow.status());
        }

        let preferences = self.services.preferences.get().await?;
        let state = self.follow.load(preferences);
        debug!("Follow state for {}: {:?}", self.namespace.name, state);
        Ok(self.follow.status())
    }

    pub fn spawn_follow_sync(self: &Arc<Self>) -> JoinHandle<Result<FollowStatus, DomainError>> {
        let page = Arc::clone(self);
        tokio::spawn(async move { page.sync_follow_state().await })
    }

    pub async fn filter_changed(&self, filters: &[AppliedFilter]) -> Result<FetchOutcome, DomainError> {
        let pending = self.begin_query(|state| {
            let change = state.query.apply_filters(filters);
            info!("Filters changed: {:?}", change.state.filters());
            Some((change.state, change.applied))
        });
        self.search(pending).await
    }

    pub async fn sort_changed(&self, field_id: &str, ascending: bool) -> Result<FetchOutcome, DomainError> {
        if self.toolbar.sort_field(field_id).is_none() {
            return Err(DomainError::invalid_input(format!(
                "unknown sort field: {}",
                field_id
            )));
        }
        let pending = self.begin_query(|state| {
            let next = state.query.apply_sort(field_id, ascending);
            info!("Sort changed: {}", next.sort_key());
            Some((next, state.applied_filters.clone()))
        });
        self.search(pending).await
    }

    pub async fn page_size_changed(&self, page_size: u32) -> Result<FetchOutcome, DomainError> {
        let pending = self.begin_query(|state| {
            let next = state.query.set_page_size(page_size)?;
            Some((next, state.applied_filters.clone()))
        });
        self.search(pending).await
    }

    pub async fn page_number_changed(&self, page_number: u32) -> Result<FetchOutcome, DomainError> {
        let pending = self.begin_query(|state| {
            let next = state.query.set_page_number(page_number)?;
            Some((next, state.applied_filters.clone()))
        });
        self.search(pending).await
    }

    pub async fn toggle_follow(&self) -> Result<FollowState, DomainError> {
        self.follow.toggle().await
    }

    /// Navigates to the detail page of a listed item and returns its path.
    pub fn open_item(&self, item: ListItem<'_>) -> String {
        let namespace = item.namespace_name().unwrap_or(&self.namespace.name);
        let path = format!("/{}/{}", namespace, item.name());
        self.services.navigator.navigate(&path);
        path
    }

    /// Computes the next query from the current one and installs it under a
    /// single lock, bumping the request generation. `None` from `update`
    /// means the change is a no-op.
    fn begin_query<F>(&self, update: F) -> Option<PendingQuery>
    where
        F: FnOnce(&PageState) -> Option<(QueryState, Vec<AppliedFilter>)>,
    {
        let mut state = self.state();
        let (next, applied) = update(&*state)?;

        let previous_query = std::mem::replace(&mut state.query, next);
        let previous_filters = std::mem::replace(&mut state.applied_filters, applied);
        state.loading = true;
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;

        Some(PendingQuery {
            generation,
            params: state.query.to_query_params(&self.namespace.name),
            previous_query,
            previous_filters,
        })
    }

    async fn search(&self, pending: Option<PendingQuery>) -> Result<FetchOutcome, DomainError> {
        let Some(pending) = pending else {
            return Ok(FetchOutcome::Unchanged);
        };
        let generation = pending.generation;

        debug!("Listing request #{} with {} params", generation, pending.params.len());
        let response = self.services.listing.query(&pending.params).await;
        let listing = response.and_then(normalize_response).map(|mut listing| {
            listing.repositories = self.enricher.enrich_all(listing.repositories);
            listing
        });

        let mut state = self.state();
        if self.generation.load(Ordering::Acquire) != generation {
            warn!("Discarding stale listing response #{}", generation);
            return Ok(FetchOutcome::Superseded);
        }
        state.loading = false;
        match listing {
            Ok(listing) => {
                state.listing = listing;
                Ok(FetchOutcome::Applied)
            }
            Err(e) => {
                // the shown listing still belongs to the previous query
                warn!("Listing request #{} failed: {}", generation, e);
                state.query = pending.previous_query;
                state.applied_filters = pending.previous_filters;
                Err(e)
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
