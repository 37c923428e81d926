//! Provides [`ContractableBoss`], the contractable BOSS ensemble
//! by Middlehurst, Vickers & Bagnall, 2019.
use rand::{
    Rng,
    SeedableRng,
    rngs::StdRng,
};

use crate::{
    BaseLearner,
    ClassIndex,
    Series,
    SeriesClassifier,
    common::checker,
    ensemble::{
        accuracy::estimate_with,
        Ensemble,
        ParameterGrid,
        SearchContract,
        SearchProgress,
        Selection,
        SubsampleSelector,
        TrainedMember,
        Workers,
    },
    error::Result,
    report,
};
use super::{
    options::CbossConfig,
    fitted::FittedCboss,
};

use std::ops::ControlFlow;


/// Defines the contractable BOSS ensemble.
///
/// `ContractableBoss` draws hyper-parameter candidates at random
/// from a finite grid, fits one base learner per candidate
/// on a random 70% subsample of the training set,
/// scores it by leave-one-out accuracy on that subsample,
/// and keeps the best `max_ensemble_size` learners.
/// The search stops after `n_parameter_samples` candidates,
/// or, under a time contract, once the time limit elapsed.
///
/// # Example
/// ```no_run
/// use cboss::prelude::*;
///
/// let rows = vec![vec![0f64; 64]; 20];
/// let labels = (0..20).map(|i| i % 2).collect::<Vec<_>>();
/// let series = Series::from_rows(&rows).unwrap();
///
/// let cboss = ContractableBoss::init()
///     .n_parameter_samples(50)
///     .max_ensemble_size(10)
///     .min_window(8)
///     .seed(0);
/// let learner = PaaNearestNeighbor::init();
///
/// let fitted = cboss.fit(&learner, &series, &labels).unwrap();
/// let predictions = fitted.predict(&series).unwrap();
/// assert_eq!(predictions.len(), 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContractableBoss {
    config: CbossConfig,
    verbose: bool,
}


impl ContractableBoss {
    /// Initialize `ContractableBoss` with the default options.
    pub fn init() -> Self {
        Self::default()
    }


    /// Initialize `ContractableBoss` from a configuration.
    pub fn from_config(config: CbossConfig) -> Self {
        Self { config, verbose: false }
    }


    /// Set the number of candidates to try.
    /// Ignored under a time contract.
    /// Default is `250`.
    #[inline]
    pub fn n_parameter_samples(mut self, n: usize) -> Self {
        self.config.n_parameter_samples = n;
        self
    }


    /// Set the maximal number of retained base learners.
    /// Default is `50`.
    #[inline]
    pub fn max_ensemble_size(mut self, size: usize) -> Self {
        self.config.max_ensemble_size = size;
        self
    }


    /// Set the maximal window length
    /// as a proportion of the series length.
    /// Default is `1.0`.
    #[inline]
    pub fn max_win_len_prop(mut self, prop: f64) -> Self {
        self.config.max_win_len_prop = prop;
        self
    }


    /// Set the minimal window length.
    /// Default is `10`.
    #[inline]
    pub fn min_window(mut self, window: usize) -> Self {
        self.config.min_window = window;
        self
    }


    /// Set the time contract in minutes.
    /// A positive value replaces the candidate count by the time limit.
    /// Default is `0`, no contract.
    #[inline]
    pub fn time_limit_in_minutes(mut self, minutes: f64) -> Self {
        self.config.time_limit_in_minutes = minutes;
        self
    }


    /// Set the degree of parallelism.
    /// `-1` uses every core, values `<= 1` run sequentially.
    /// Default is `1`.
    #[inline]
    pub fn n_jobs(mut self, n_jobs: i32) -> Self {
        self.config.n_jobs = n_jobs;
        self
    }


    /// Set the seed of the random draws.
    /// Without a seed, one is drawn from entropy at every fit.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.random_state = Some(seed);
        self
    }


    /// Print the search settings and the retained members to stdout.
    /// Default is `false`.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Returns the current options.
    #[inline]
    pub fn config(&self) -> &CbossConfig {
        &self.config
    }


    /// Returns the name of the ensemble.
    pub fn name(&self) -> &str {
        "Contractable BOSS"
    }


    /// Returns the options as printable pairs.
    pub fn info(&self) -> Option<Vec<(&str, String)>> {
        let config = &self.config;
        let seed = config.random_state
            .map(|s| s.to_string())
            .unwrap_or_else(|| "entropy".into());
        let info = Vec::from([
            ("# of candidates", config.n_parameter_samples.to_string()),
            ("Max ensemble size", config.max_ensemble_size.to_string()),
            ("Max window prop.", format!("{}", config.max_win_len_prop)),
            ("Min window", config.min_window.to_string()),
            ("Time limit [min]", format!("{}", config.time_limit_in_minutes)),
            ("# of jobs", config.n_jobs.to_string()),
            ("Seed", seed),
        ]);
        Some(info)
    }


    /// Fits the ensemble on `series` labeled by `labels`.
    ///
    /// Every option is validated before any base learner is trained.
    /// In particular, [`CbossError::InvalidWindow`] is returned
    /// if `min_window` exceeds the maximal window plus one.
    ///
    /// [`CbossError::InvalidWindow`]: crate::CbossError::InvalidWindow
    pub fn fit<L, W>(
        &self,
        learner: &W,
        series: &Series,
        labels: &[L],
    ) -> Result<FittedCboss<L, W::Model>>
        where L: Ord + Clone,
              W: BaseLearner,
    {
        let mut search = self.preprocess(learner, series, labels)?;

        let flow = (1..).try_for_each(|iter| search.boost(learner, iter));
        if let ControlFlow::Break(Err(e)) = flow {
            return Err(e);
        }

        Ok(self.postprocess(search))
    }


    fn preprocess<'a, L, W>(
        &self,
        learner: &W,
        series: &'a Series,
        labels: &[L],
    ) -> Result<Search<'a, L, W::Model>>
        where L: Ord + Clone,
              W: BaseLearner,
    {
        self.config.validate()?;
        let n_instances = series.n_instances();
        checker::training_sample(n_instances, labels.len())?;

        let class_index = ClassIndex::fit(labels);
        let classes = class_index.encode(labels)?;

        let grid = ParameterGrid::new(
            series.series_length(),
            self.config.min_window,
            self.config.max_win_len_prop,
        )?;
        let workers = Workers::new(self.config.n_jobs)?;

        let seed = self.config.random_state
            .unwrap_or_else(|| rand::thread_rng().gen());
        let selector = SubsampleSelector::new(n_instances);
        let contract = SearchContract::new(
            self.config.time_limit_in_minutes,
            self.config.n_parameter_samples,
        );

        log::info!(
            "fitting {} on {n_instances} series of length {} \
             with {} classes; {} candidates \
             (windows {}..={} step {}), subsample size {}",
            self.name(),
            series.series_length(),
            class_index.n_classes(),
            grid.len(),
            grid.min_window(),
            grid.max_window(),
            grid.window_increment(),
            selector.size(),
        );
        if contract.is_timed() {
            log::info!("time contract of {:?}", contract.time_limit());
        } else {
            log::info!("trying up to {} candidates", contract.target());
        }

        if self.verbose {
            report::print_stats(self.name(), self.info(), learner);
        }

        Ok(Search {
            series,
            classes,
            class_index,
            grid,
            selector,
            rng: StdRng::seed_from_u64(seed),
            seed,
            contract,
            ensemble: Ensemble::with_capacity(self.config.max_ensemble_size),
            workers,
            progress: SearchProgress::start(),
        })
    }


    fn postprocess<L, M>(&self, search: Search<'_, L, M>)
        -> FittedCboss<L, M>
        where M: SeriesClassifier,
    {
        let Search {
            series,
            class_index,
            seed,
            contract,
            ensemble,
            progress,
            ..
        } = search;

        if !contract.is_timed() && progress.n_tried() < contract.target() {
            log::warn!(
                "the grid ran out after {} of {} candidates",
                progress.n_tried(),
                contract.target(),
            );
        }

        log::info!(
            "kept {} of {} candidates in {:?}",
            ensemble.len(),
            progress.n_tried(),
            progress.elapsed(),
        );

        let fitted = FittedCboss::new(
            class_index,
            ensemble,
            series.series_length(),
            series.n_instances(),
            progress.n_tried(),
            progress.elapsed(),
            seed,
            self.config.n_jobs,
        );

        if self.verbose {
            report::print_members(fitted.members());
        }
        fitted
    }
}


/// The state of one fit.
struct Search<'a, L, M> {
    series: &'a Series,
    classes: Vec<usize>,
    class_index: ClassIndex<L>,
    grid: ParameterGrid,
    selector: SubsampleSelector,
    rng: StdRng,
    seed: u64,
    contract: SearchContract,
    ensemble: Ensemble<M>,
    workers: Workers,
    progress: SearchProgress,
}


impl<L, M> Search<'_, L, M>
    where M: SeriesClassifier,
{
    /// One step of the search.
    /// Breaks with the number of tried candidates once the contract
    /// is met, or with the first error.
    fn boost<W>(
        &mut self,
        learner: &W,
        iteration: usize,
    ) -> ControlFlow<Result<usize>>
        where W: BaseLearner<Model = M>,
    {
        if !self.contract.should_continue(&self.progress, self.grid.len()) {
            return ControlFlow::Break(Ok(iteration - 1));
        }

        match self.try_candidate(learner) {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => ControlFlow::Break(Err(e)),
        }
    }


    fn try_candidate<W>(&mut self, learner: &W) -> Result<()>
        where W: BaseLearner<Model = M>,
    {
        let Some(candidate) = self.grid.sample(&mut self.rng) else {
            return Ok(());
        };
        let subsample = self.selector.draw(&mut self.rng);

        let sub_series = self.series.select(&subsample);
        let sub_classes = subsample.iter()
            .map(|&i| self.classes[i])
            .collect::<Vec<_>>();

        let n_classes = self.class_index.n_classes();
        let model = learner.fit(
            &candidate, &sub_series, &sub_classes, n_classes
        )?;

        let threshold = self.ensemble.threshold();
        let accuracy = estimate_with(
            &self.workers, &model, &sub_classes, threshold
        )?;

        let member = TrainedMember::new(
            model,
            candidate,
            subsample,
            self.series.n_instances(),
            accuracy,
        );
        let selection = self.ensemble.offer(member);
        self.progress.record();

        match selection {
            Selection::Rejected => log::debug!(
                "candidate {}: {candidate} scored {accuracy:.4}, rejected",
                self.progress.n_tried(),
            ),
            Selection::Appended(slot) | Selection::Replaced(slot) => {
                log::debug!(
                    "candidate {}: {candidate} scored {accuracy:.4}, \
                     kept at slot {slot}",
                    self.progress.n_tried(),
                )
            },
        }
        Ok(())
    }
}
