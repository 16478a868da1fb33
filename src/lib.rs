pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AuthService, AuthorPageServices, AuthorPageUseCase, AuthorView, FetchOutcome,
    FollowNamespaceUseCase, ListingService, NamespaceService, Navigator, OpenOutcome,
    PaginationView, PreferencesService, ResolveAuthorRouteUseCase, RouteData, NOT_FOUND_PATH,
};

pub use cli::{Commands, OutputFormat, PackageKind};

pub use connector::{GalaxyApiClient, GalaxyFixture, InMemoryGalaxy, RecordingNavigator};

pub use domain::{
    AppliedFilter, Clock, CollectionItem, DomainError, FilterType, FixedClock, FollowState,
    FollowStatus, ItemEnricher, ListItem, ListingPage, Me, Namespace, Page, PaginatedResult,
    QueryParams, QueryState, RepositoryItem, SystemClock, ToolbarConfig, UserPreferences,
};
