//! Command handlers.
//!
//! [`Cli`] owns the core services for one invocation and turns each
//! subcommand into core calls plus rendered output. Policy outcomes such as
//! duplicates or "please sign in" print a status line and succeed; errors
//! propagate to `main` and exit non-zero.

use std::{fmt::Write as _, sync::Arc};

use anyhow::{anyhow, Context, Result};
use exploreo_core::{
    auth::{self, AuthGate, LocalAuth},
    catalog,
    display::{
        BookmarkLinks, Bookmarks, DeleteResult, Itineraries, Places, Regions, StopLinks,
    },
    params::DocumentId,
    search::{GeoapifyClient, PlaceSearch},
    store::{ItineraryStore, ProfileStore},
    BookmarkOutcome, BookmarkService, Config, DocumentStore, ItineraryItem, ItinerarySession,
    LoadOutcome, OperationStatus, Place, SaveOutcome, SettingKey, SettingsStore,
};
use log::debug;

use crate::{
    cli::{
        AuthCommands, BookmarkCommands, CatalogArgs, ItineraryCommands, LatestArgs, PlanArgs,
        SearchArgs, SettingsCommands,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    config: Config,
    store: DocumentStore,
    auth: Arc<LocalAuth>,
    settings: SettingsStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(
        config: Config,
        store: DocumentStore,
        auth: Arc<LocalAuth>,
        settings: SettingsStore,
        renderer: TerminalRenderer,
    ) -> Self {
        Self {
            config,
            store,
            auth,
            settings,
            renderer,
        }
    }

    fn bookmarks(&self) -> BookmarkService {
        BookmarkService::new(Arc::new(self.store.clone()), self.auth.clone())
    }

    fn session(&self) -> ItinerarySession {
        ItinerarySession::new(Arc::new(self.store.clone()), self.auth.clone())
    }

    fn owner_id(&self) -> String {
        self.auth.current_user_id().unwrap_or_default()
    }

    fn info(&self, message: impl Into<String>) -> Result<()> {
        self.renderer.render_status(&OperationStatus::info(message))
    }

    fn success(&self, message: impl Into<String>) -> Result<()> {
        self.renderer
            .render_status(&OperationStatus::success(message))
    }

    pub fn catalog(&self, args: CatalogArgs) -> Result<()> {
        match args.region {
            Some(name) => {
                let region =
                    catalog::region(&name).ok_or_else(|| anyhow!("Unknown region '{name}'"))?;
                self.renderer
                    .render(&Regions(std::slice::from_ref(region)).to_string())
            }
            None => self.renderer.render(&Regions(catalog::regions()).to_string()),
        }
    }

    pub async fn search(&self, args: SearchArgs) -> Result<()> {
        let params = args.into_params(self.config.search_limit);
        let client = GeoapifyClient::from_config(&self.config)?;
        let places = client.search(&params).await?;
        self.renderer.render(&Places(places).to_string())
    }

    pub async fn handle_auth_command(&self, command: AuthCommands) -> Result<()> {
        match command {
            AuthCommands::SignUp(args) => {
                let language = self.settings.current().language;
                let profile = auth::register(&*self.auth, &self.store, &args.into(), &language)
                    .await?;
                self.success(format!("Signed up as {}", profile.email))?;
                self.renderer.render(&profile.to_string())
            }
            AuthCommands::SignIn(args) => {
                let uid = self.auth.sign_in(&args.into()).await?;
                let name = ProfileStore::get(&self.store, &uid)
                    .await?
                    .map_or(uid, |profile| profile.display_name);
                self.success(format!("Signed in as {name}"))
            }
            AuthCommands::SignOut => {
                self.auth.sign_out().await?;
                self.success("Signed out")
            }
            AuthCommands::Whoami => {
                match ProfileStore::get(&self.store, &self.owner_id()).await? {
                    Some(profile) => self.renderer.render(&profile.to_string()),
                    None => self.info("Not signed in"),
                }
            }
        }
    }

    pub async fn handle_bookmark_command(&self, command: BookmarkCommands) -> Result<()> {
        let service = self.bookmarks();
        match command {
            BookmarkCommands::Add { attraction } => {
                let found = catalog::find(&attraction)
                    .ok_or_else(|| anyhow!("No attraction named '{attraction}' in the catalog"))?;
                self.report_bookmark(service.add_place(&found.to_place()).await?)
            }
            BookmarkCommands::AddPlace(args) => {
                let place = Place::from(args);
                self.report_bookmark(service.add_place(&place).await?)
            }
            BookmarkCommands::List => {
                let bookmarks = service.list().await?;
                self.renderer.render(&Bookmarks(bookmarks).to_string())
            }
            BookmarkCommands::Show(args) => {
                let Some(bookmark) = self.find_bookmark(&service, args.into()).await? else {
                    return self.info("Please sign in to view bookmarks");
                };
                self.renderer.render(&bookmark.to_string())
            }
            BookmarkCommands::Remove(args) => {
                let DocumentId { id } = args.into();
                match service.get(&id).await? {
                    Some(bookmark) => {
                        service.remove(&id).await?;
                        self.renderer
                            .render(&DeleteResult::new(bookmark).to_string())
                    }
                    None => self.info(format!("No bookmark with ID {id}")),
                }
            }
            BookmarkCommands::Share(args) => {
                let Some(bookmark) = self.find_bookmark(&service, args.into()).await? else {
                    return self.info("Please sign in to view bookmarks");
                };
                self.renderer
                    .render_plain(&format!("{}\n", bookmark.share_text()))
            }
            BookmarkCommands::Links(args) => {
                let Some(bookmark) = self.find_bookmark(&service, args.into()).await? else {
                    return self.info("Please sign in to view bookmarks");
                };
                let quality = self.settings.current().image_quality;
                let links = BookmarkLinks::new(&bookmark, &self.config, quality);
                self.renderer.render(&links.to_string())
            }
        }
    }

    /// `None` when signed out; a missing id is an error.
    async fn find_bookmark(
        &self,
        service: &BookmarkService,
        DocumentId { id }: DocumentId,
    ) -> Result<Option<exploreo_core::Bookmark>> {
        if self.auth.current_user_id().is_none() {
            return Ok(None);
        }
        service
            .get(&id)
            .await?
            .map(Some)
            .ok_or_else(|| anyhow!("Bookmark {id} not found"))
    }

    fn report_bookmark(&self, outcome: BookmarkOutcome) -> Result<()> {
        match outcome {
            BookmarkOutcome::Added(_) => self.renderer.render(&outcome.to_string()),
            BookmarkOutcome::Duplicate | BookmarkOutcome::Unauthenticated => {
                self.info(outcome.to_string())
            }
        }
    }

    pub async fn handle_itinerary_command(&self, command: ItineraryCommands) -> Result<()> {
        match command {
            ItineraryCommands::Plan(args) => self.plan(args).await,
            ItineraryCommands::Latest(args) => self.latest(args).await,
            ItineraryCommands::List => {
                let itineraries = self.store.list_all(&self.owner_id()).await?;
                self.renderer.render(&Itineraries(itineraries).to_string())
            }
        }
    }

    async fn plan(&self, args: PlanArgs) -> Result<()> {
        let mut session = self.session();
        for (position, stop) in args.items.into_iter().enumerate() {
            let item = ItineraryItem::try_from(stop.0)
                .with_context(|| format!("Invalid stop #{}", position + 1))?;
            session.add_item(item);
        }
        debug!("Planned {} stops", session.len());

        if args.share || !args.save {
            self.renderer.render_plain(&session.render_share_text())?;
        }
        if args.save {
            let outcome = session.save().await?;
            match outcome {
                SaveOutcome::Saved(_) | SaveOutcome::AlreadySaved(_) => {
                    self.success(outcome.to_string())?;
                }
                SaveOutcome::NothingToSave | SaveOutcome::Unauthenticated => {
                    self.info(outcome.to_string())?;
                }
            }
        }
        Ok(())
    }

    async fn latest(&self, args: LatestArgs) -> Result<()> {
        let mut session = self.session();
        let outcome = session.load_latest().await?;
        if !matches!(outcome, LoadOutcome::Loaded(_)) {
            return self.info(outcome.to_string());
        }

        if args.share {
            return self.renderer.render_plain(&session.render_share_text());
        }
        let mut markdown = String::from("# Latest itinerary\n\n");
        for (index, item) in session.items().iter().enumerate() {
            writeln!(markdown, "{}. {item}", index + 1)?;
            if let Some(links) = StopLinks::new(item, &self.config) {
                write!(markdown, "{links}")?;
            }
        }
        self.renderer.render(&markdown)
    }

    pub async fn handle_settings_command(&self, command: SettingsCommands) -> Result<()> {
        match command {
            SettingsCommands::Show => {}
            SettingsCommands::Set { key, value } => {
                let key: SettingKey = key.parse()?;
                self.settings.set(key, &value).await?;
                self.success(format!("Updated {}", key.name()))?;
            }
        }
        self.renderer.render(&self.settings.current().to_string())
    }
}
