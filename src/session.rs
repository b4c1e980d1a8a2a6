//! A loaded choropleth: joined features, the expressed attribute and its
//! current classification, plus the render sinks that follow it.

use anyhow::Result;
use tracing::{info, warn};

use crate::{
    attribute::{AttributeCatalog, AttributeName, AttributeState},
    classify::{classify_with, Ckmeans, ClassBreaks, Classification, Clusterer},
    color::{ColorMapper, Palette, Rgb},
    config::Style,
    error::ChoroplethError,
    map::{DatasetJoiner, Feature, JoinReport, Record},
    view::{chart_title, Chart, Label},
};

/// Receives the current scene every time the expressed attribute changes.
pub trait RenderSink {
    fn render(&mut self, scene: &Scene<'_>) -> Result<()>;
}

/// Read-only view of what should be drawn right now.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub expressed: &'a AttributeName,
    pub features: &'a [Feature],
    /// `None` when the expressed attribute has no values at all.
    pub classification: Option<&'a Classification>,
    pub mapper: &'a ColorMapper,
    pub chart_max: f64,
}

impl<'a> Scene<'a> {
    /// Class and fill color of one feature.
    pub fn fill(&self, feature: &Feature) -> (Option<usize>, Rgb) {
        let value = feature.value(self.expressed);
        (self.mapper.class_of(value), self.mapper.color(value))
    }

    /// Fill of every feature, in feature order.
    pub fn fills(self) -> impl Iterator<Item = (&'a Feature, Option<usize>, Rgb)> + 'a {
        let scene = self;
        self.features.iter().map(move |feature| {
            let (class, color) = scene.fill(feature);
            (feature, class, color)
        })
    }

    pub fn chart(&self) -> Chart { Chart::build(self.features, self.expressed, self.mapper, self.chart_max) }

    pub fn title(&self) -> String { chart_title(self.expressed) }

    /// Hover label for the feature with `key`.
    pub fn label(&self, key: &str) -> Option<Label> {
        self.features.iter()
            .find(|feature| feature.key() == key)
            .map(|feature| Label::new(feature, self.expressed))
    }
}

/// Join once, then re-classify and re-color on every attribute selection.
pub struct Choropleth {
    state: AttributeState,
    features: Vec<Feature>,
    report: JoinReport,
    palette: Palette,
    unknown: Rgb,
    classes: usize,
    chart_max: f64,
    strategy: Box<dyn Clusterer>,
    classification: Option<Classification>,
    mapper: ColorMapper,
    sinks: Vec<Box<dyn RenderSink>>,
}

impl Choropleth {
    /// Join `records` into `features` and classify the catalog's first attribute.
    pub fn new(style: Style, features: Vec<Feature>, records: &[Record]) -> Result<Self, ChoroplethError> {
        Self::with_strategy(style, features, records, Box::new(Ckmeans))
    }

    /// Same as `new`, with a custom clustering strategy.
    pub fn with_strategy(
        style: Style,
        features: Vec<Feature>,
        records: &[Record],
        strategy: Box<dyn Clusterer>,
    ) -> Result<Self, ChoroplethError> {
        style.validate()?;
        let Style { catalog, palette, unknown, classes, chart_max } = style;

        let (features, report) = DatasetJoiner::new(&catalog).join(features, records);
        let state = AttributeState::new(catalog);

        let (classification, mapper) = styling(
            strategy.as_ref(), &features, state.expressed(), &palette, unknown, classes,
        )?;

        Ok(Self {
            state,
            features,
            report,
            palette,
            unknown,
            classes,
            chart_max,
            strategy,
            classification,
            mapper,
            sinks: Vec::new(),
        })
    }

    #[inline] pub fn catalog(&self) -> &AttributeCatalog { self.state.catalog() }

    #[inline] pub fn expressed(&self) -> &AttributeName { self.state.expressed() }

    #[inline] pub fn features(&self) -> &[Feature] { &self.features }

    #[inline] pub fn join_report(&self) -> &JoinReport { &self.report }

    #[inline] pub fn classification(&self) -> Option<&Classification> { self.classification.as_ref() }

    #[inline] pub fn mapper(&self) -> &ColorMapper { &self.mapper }

    /// Non-missing values of `attr` across the joined features.
    pub fn values(&self, attr: &AttributeName) -> Vec<f64> { values_of(&self.features, attr) }

    pub fn scene(&self) -> Scene<'_> {
        Scene {
            expressed: self.state.expressed(),
            features: &self.features,
            classification: self.classification.as_ref(),
            mapper: &self.mapper,
            chart_max: self.chart_max,
        }
    }

    /// Register a sink. It is not rendered until the next `render` or selection.
    pub fn subscribe(&mut self, sink: Box<dyn RenderSink>) {
        self.sinks.push(sink);
    }

    /// Switch the expressed attribute, re-classify, and notify every sink.
    ///
    /// An unknown name fails with [`ChoroplethError::UnknownAttribute`] and
    /// changes nothing. Once the name is accepted the selection stands: a
    /// failing sink is reported through the returned error, but every other
    /// sink still receives the new scene (see [`Choropleth::render`]).
    pub fn select_attribute(&mut self, name: &str) -> Result<()> {
        let attr = self.state.catalog().get(name)
            .ok_or_else(|| ChoroplethError::UnknownAttribute(name.to_string()))?
            .clone();

        let (classification, mapper) = styling(
            self.strategy.as_ref(), &self.features, &attr, &self.palette, self.unknown, self.classes,
        )?;

        self.state.set_expressed(name)?;
        self.classification = classification;
        self.mapper = mapper;
        info!(attribute = %attr, classes = self.mapper.palette().len(), "expressed attribute selected");

        self.render()
    }

    /// Push the current scene to every registered sink, in registration order.
    ///
    /// A sink error does not stop the remaining sinks; the first error is
    /// returned after all of them ran.
    pub fn render(&mut self) -> Result<()> {
        let scene = Scene {
            expressed: self.state.expressed(),
            features: &self.features,
            classification: self.classification.as_ref(),
            mapper: &self.mapper,
            chart_max: self.chart_max,
        };
        let mut first_error = None;
        for (index, sink) in self.sinks.iter_mut().enumerate() {
            if let Err(err) = sink.render(&scene) {
                warn!(sink = index, attribute = %scene.expressed, "render sink failed: {err:#}");
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

fn values_of(features: &[Feature], attr: &AttributeName) -> Vec<f64> {
    features.iter().filter_map(|feature| feature.value(attr)).collect()
}

/// Classification and color mapper for `attr`. An attribute with no values
/// gets a single-class mapper, so every feature is drawn as unknown.
fn styling(
    strategy: &dyn Clusterer,
    features: &[Feature],
    attr: &AttributeName,
    palette: &Palette,
    unknown: Rgb,
    classes: usize,
) -> Result<(Option<Classification>, ColorMapper), ChoroplethError> {
    let values = values_of(features, attr);
    match classify_with(strategy, &values, classes) {
        Ok(classification) => {
            if let Some(requested) = classification.adjusted_from() {
                warn!(
                    attribute = %attr,
                    requested,
                    classes = classification.class_count(),
                    "not enough distinct values; using fewer classes",
                );
            }
            let palette = palette.resample(classification.class_count())?;
            let mapper = ColorMapper::new(classification.breaks().clone(), palette, unknown)?;
            Ok((Some(classification), mapper))
        }
        Err(ChoroplethError::InsufficientData { .. }) => {
            warn!(attribute = %attr, "attribute has no values; every feature is unknown");
            let mapper = ColorMapper::new(ClassBreaks::new(Vec::new())?, palette.resample(1)?, unknown)?;
            Ok((None, mapper))
        }
        Err(err) => Err(err),
    }
}
