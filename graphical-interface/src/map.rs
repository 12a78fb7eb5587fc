use std::time::{Duration, Instant};

use egui::Context;
use feed::{AircraftProvider, HttpFeed};
use logger::{Color, Logger};
use walkers::{
    sources::{Mapbox, MapboxStyle, OpenStreetMap},
    HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles,
};

use crate::{
    config::Config,
    countries,
    dataset::{load_airports, BUNDLED_AIRPORTS},
    errors::MapError,
    icons::Icons,
    plugins,
    refresher::{CancellationToken, Refresher, RefresherHandle},
    sources::Surface,
    state::ViewState,
    types::{CountryHighlight, Route, Worldview},
    windows,
};

const INITIAL_LAT: f64 = 44.0;
const INITIAL_LON: f64 = 19.0;
const INITIAL_ZOOM: f64 = 5.;
const UPDATE_TICK_MS: u64 = 1000;

/// Owns the map surface, its layers and the aircraft refresher.
///
/// Layers are drawn in registration order: airports (with hover popup),
/// planes, route, then the country fill on top.
pub struct MapShell {
    surface: Surface,
    map_memory: MapMemory,
    view_state: ViewState,
    icons: Icons,
    route: Route,
    highlight: CountryHighlight,
    worldview: Worldview,
    refresher: Option<RefresherHandle>,
    logger: Logger,
    last_update: Instant,
}

impl MapShell {
    /// Creates the shell polling the configured HTTP endpoint.
    pub fn new(egui_ctx: Context, config: Config, logger: Logger) -> Result<Self, MapError> {
        let provider = HttpFeed::new(config.feed_url.clone());
        Self::with_provider(egui_ctx, config, logger, provider)
    }

    /// Creates the shell with any aircraft provider and starts refreshing.
    ///
    /// Icon and airport-dataset failures are returned before anything is spawned.
    pub fn with_provider<P: AircraftProvider + 'static>(
        egui_ctx: Context,
        config: Config,
        logger: Logger,
        provider: P,
    ) -> Result<Self, MapError> {
        let icons = Icons::load(&egui_ctx)?;
        let airports = load_airports(BUNDLED_AIRPORTS)?;

        let surface = Surface::new(Some(tiles_for(&config, &egui_ctx, &logger)));

        let mut map_memory = MapMemory::default();
        if map_memory.set_zoom(INITIAL_ZOOM).is_err() {
            let _ = logger.warn("Initial zoom rejected, using the default one");
        }

        countries::spawn_loader(
            config.countries_url.clone(),
            surface.countries.clone(),
            logger.clone(),
        )?;

        let refresher = Refresher::new(provider, surface.planes.clone(), logger.clone())
            .with_interval(config.refresh_interval)
            .spawn(CancellationToken::new())?;

        let _ = logger.info(
            &format!("Map ready with {} airports", airports.len()),
            Color::Green,
        );

        Ok(Self {
            surface,
            map_memory,
            view_state: ViewState::new(airports),
            icons,
            route: Route::fixed(),
            highlight: CountryHighlight::default(),
            worldview: Worldview::new(config.worldview),
            refresher: Some(refresher),
            logger,
            last_update: Instant::now(),
        })
    }

    /// Stops the refresher and releases the surface. Later calls do nothing.
    pub fn teardown(&mut self) {
        if let Some(refresher) = self.refresher.take() {
            refresher.cancel();
        }

        if self.surface.release() {
            let _ = self.logger.info("Map surface released", Color::Yellow);
        }
    }
}

impl Drop for MapShell {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn tiles_for(config: &Config, egui_ctx: &Context, logger: &Logger) -> Box<dyn Tiles> {
    match &config.access_token {
        Some(access_token) => Box::new(HttpTiles::with_options(
            Mapbox {
                style: MapboxStyle::Dark,
                high_resolution: false,
                access_token: access_token.clone(),
            },
            HttpOptions::default(),
            egui_ctx.to_owned(),
        )),
        None => {
            let _ = logger.warn("No Mapbox access token configured, using OpenStreetMap tiles");
            Box::new(HttpTiles::with_options(
                OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            ))
        }
    }
}

impl eframe::App for MapShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.last_update.elapsed() >= Duration::from_millis(UPDATE_TICK_MS) {
            self.view_state.update_planes(&self.surface.planes);
            self.view_state.update_countries(&self.surface.countries);
            self.last_update = Instant::now();
        }

        ctx.request_repaint_after(Duration::from_millis(UPDATE_TICK_MS));

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let my_position = Position::from_lat_lon(INITIAL_LAT, INITIAL_LON);

                let tiles = self
                    .surface
                    .tiles
                    .as_mut()
                    .map(|tiles| tiles.as_mut() as &mut dyn Tiles);

                let map = Map::new(tiles, &mut self.map_memory, my_position)
                    .with_plugin(plugins::Airports::new(
                        &self.view_state.airports,
                        &self.icons.airport,
                    ))
                    .with_plugin(plugins::Planes::new(
                        &self.view_state.planes,
                        &self.icons.plane,
                    ))
                    .with_plugin(plugins::RouteLine::new(&self.route))
                    .with_plugin(plugins::Countries::new(
                        &self.view_state.countries,
                        &self.highlight,
                        &self.worldview,
                    ));

                ui.add(map);

                windows::zoom(ui, &mut self.map_memory);
                windows::status(
                    ui,
                    self.view_state.planes.len(),
                    self.surface.planes.updated_at(),
                );
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.teardown();
    }
}
