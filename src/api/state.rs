use std::sync::Arc;

use axum::extract::FromRef;
use axum_template::engine::Engine;
use derive_new::new;
use tera::Tera;

use crate::dashboard::Theme;
use crate::dataset::Dataset;

pub type AppEngine = Engine<Tera>;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

#[derive(Clone, FromRef, new)]
pub struct App {
    pub dataset: Arc<Dataset>,
    pub engine: AppEngine,
    pub theme: Arc<Theme>,
}

impl App {
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

pub fn create_app(dataset: Dataset) -> Result<App, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template("index.html", INDEX_TEMPLATE)?;

    Ok(App::new(
        Arc::new(dataset),
        Engine::from(tera),
        Arc::new(Theme::default()),
    ))
}
