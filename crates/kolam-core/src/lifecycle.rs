//! Analysis lifecycle controller.
//!
//! Owns the single [`AnalysisSession`], drives upload → poll → fetch against
//! an [`AnalysisBackend`], and publishes:
//!
//! - session snapshots on a `watch` channel (last writer wins)
//! - [`Notice`]s on a `broadcast` channel
//!
//! Each run gets a generation number and a [`CancellationToken`]. `reset`,
//! a new `start`, and dropping the controller cancel the in-flight run, and
//! a run whose generation is no longer current never touches the session.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::api::{AnalysisBackend, KolamApi};
use crate::config::{ClientConfig, PollPolicy};
use crate::error::{KolamError, KolamResult};
use crate::notice::Notice;
use crate::session::{accept_upload, next_step, AnalysisSession, PollStep};
use crate::types::{AnalysisId, AnalysisResult};
use crate::upload::KolamImage;

/// Default capacity for the notice broadcast channel
const NOTICE_CHANNEL_CAPACITY: usize = 32;

/// File name used when saving the analysis image
pub fn download_file_name(id: &AnalysisId) -> String {
    format!("kolam-analysis-{}.png", id)
}

enum DownloadTarget<'a> {
    Dir(&'a Path),
    FileOrDir(&'a Path),
}

struct RunState {
    generation: u64,
    cancel: CancellationToken,
}

struct Shared {
    backend: Arc<dyn AnalysisBackend>,
    policy: PollPolicy,
    state: watch::Sender<AnalysisSession>,
    notices: broadcast::Sender<Notice>,
    run: Mutex<RunState>,
}

/// Handle on the one analysis a client tracks.
pub struct AnalysisController {
    shared: Arc<Shared>,
}

impl AnalysisController {
    pub fn new(backend: Arc<dyn AnalysisBackend>, policy: PollPolicy) -> Self {
        let (state, _) = watch::channel(AnalysisSession::default());
        let (notices, _) = broadcast::channel(NOTICE_CHANNEL_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                backend,
                policy,
                state,
                notices,
                run: Mutex::new(RunState {
                    generation: 0,
                    cancel: CancellationToken::new(),
                }),
            }),
        }
    }

    /// Controller talking to the HTTP backend described by `config`.
    pub fn with_api(config: ClientConfig) -> KolamResult<Self> {
        let policy = config.poll;
        let api = KolamApi::new(config)?;
        Ok(Self::new(Arc::new(api), policy))
    }

    pub fn policy(&self) -> PollPolicy {
        self.shared.policy
    }

    pub fn subscribe(&self) -> watch::Receiver<AnalysisSession> {
        self.shared.state.subscribe()
    }

    pub fn notices(&self) -> broadcast::Receiver<Notice> {
        self.shared.notices.subscribe()
    }

    /// Current session snapshot.
    pub fn session(&self) -> AnalysisSession {
        self.shared.state.borrow().clone()
    }

    /// Start analysing `image` on a background task.
    ///
    /// The session is `Uploading` when this returns. Any previous run is
    /// cancelled.
    pub fn start(&self, image: KolamImage) -> tokio::task::JoinHandle<KolamResult<AnalysisResult>> {
        let (generation, cancel) = self.shared.begin(image.clone());
        let shared = self.shared.clone();
        tokio::spawn(async move { shared.drive(generation, cancel, image).await })
    }

    /// Analyse `image` and wait for the outcome.
    pub async fn run(&self, image: KolamImage) -> KolamResult<AnalysisResult> {
        let (generation, cancel) = self.shared.begin(image.clone());
        self.shared.drive(generation, cancel, image).await
    }

    /// Cancel any in-flight run and return the session to its initial state.
    pub fn reset(&self) {
        let mut run = self.shared.run.lock();
        run.cancel.cancel();
        run.generation += 1;
        run.cancel = CancellationToken::new();
        self.shared.state.send_replace(AnalysisSession::default());
        debug!(generation = run.generation, "analysis session reset");
    }

    /// Attach a result directly, bypassing the backend.
    pub fn set_result(&self, result: AnalysisResult) {
        self.shared.state.send_modify(|s| s.set_result(result));
    }

    /// Attach an analysis id directly, bypassing the backend.
    pub fn set_analysis_id(&self, id: AnalysisId) {
        self.shared.state.send_modify(|s| s.set_analysis_id(id));
    }

    /// Save the analysis image for the current session.
    ///
    /// `dest` may be an existing directory (the file is named after the
    /// analysis id) or a full file path.
    pub async fn download_image(&self, dest: &Path) -> KolamResult<PathBuf> {
        let outcome = self.try_download(DownloadTarget::FileOrDir(dest)).await;
        self.report_download(outcome)
    }

    /// Save the analysis image as `kolam-analysis-<id>.png` inside `dir`,
    /// creating the directory when it does not exist yet.
    pub async fn download_image_into(&self, dir: &Path) -> KolamResult<PathBuf> {
        let outcome = self.try_download(DownloadTarget::Dir(dir)).await;
        self.report_download(outcome)
    }

    fn report_download(&self, outcome: KolamResult<PathBuf>) -> KolamResult<PathBuf> {
        match &outcome {
            Ok(path) => {
                info!(path = %path.display(), "analysis image saved");
                self.shared.publish(Notice::info(
                    "Download started",
                    "Analysis image is being downloaded...",
                ));
            }
            Err(e) => {
                warn!(error = %e, "analysis image download failed");
                self.shared.publish(Notice::error(
                    "Download failed",
                    "Could not download analysis image",
                ));
            }
        }
        outcome
    }

    async fn try_download(&self, target: DownloadTarget<'_>) -> KolamResult<PathBuf> {
        let id = self
            .session()
            .analysis_id
            .ok_or(KolamError::NoAnalysis)?;
        let bytes = self.shared.backend.download_image(&id).await?;

        let path = match target {
            DownloadTarget::Dir(dir) => {
                tokio::fs::create_dir_all(dir).await?;
                dir.join(download_file_name(&id))
            }
            DownloadTarget::FileOrDir(dest) if dest.is_dir() => dest.join(download_file_name(&id)),
            DownloadTarget::FileOrDir(dest) => dest.to_path_buf(),
        };
        tokio::fs::write(&path, &bytes).await?;
        Ok(path)
    }

    /// Publish an arbitrary notice (used by views for local validation).
    pub fn notify(&self, notice: Notice) {
        self.shared.publish(notice);
    }
}

impl Drop for AnalysisController {
    fn drop(&mut self) {
        self.shared.run.lock().cancel.cancel();
    }
}

impl Shared {
    fn begin(&self, image: KolamImage) -> (u64, CancellationToken) {
        let mut run = self.run.lock();
        run.cancel.cancel();
        run.generation += 1;
        run.cancel = CancellationToken::new();
        self.state.send_modify(|s| s.begin_upload(image));
        (run.generation, run.cancel.clone())
    }

    /// Apply `f` to the session if `generation` is still the current run.
    fn update(&self, generation: u64, f: impl FnOnce(&mut AnalysisSession)) -> bool {
        let run = self.run.lock();
        if run.generation != generation {
            return false;
        }
        self.state.send_modify(f);
        true
    }

    fn publish(&self, notice: Notice) {
        // No receivers is fine
        let _ = self.notices.send(notice);
    }

    fn publish_for(&self, generation: u64, notice: Notice) {
        if self.run.lock().generation == generation {
            self.publish(notice);
        }
    }

    async fn drive(
        &self,
        generation: u64,
        cancel: CancellationToken,
        image: KolamImage,
    ) -> KolamResult<AnalysisResult> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(generation, "analysis run cancelled");
                Err(KolamError::Cancelled)
            }
            outcome = self.analyze(generation, &image) => outcome,
        }
    }

    async fn analyze(&self, generation: u64, image: &KolamImage) -> KolamResult<AnalysisResult> {
        let id = match self.backend.upload(image).await.and_then(accept_upload) {
            Ok(id) => id,
            Err(e) => {
                self.fail(generation, "Upload failed", &e);
                return Err(e);
            }
        };

        info!(analysis_id = %id, file = %image.file_name, "upload accepted");
        self.update(generation, |s| s.upload_accepted(id.clone()));
        self.publish_for(
            generation,
            Notice::info("Upload successful", "Your kolam is being analyzed..."),
        );

        match self.poll(generation, &id).await {
            Ok(result) => {
                info!(analysis_id = %id, "analysis complete");
                self.update(generation, |s| s.complete(result.clone()));
                self.publish_for(
                    generation,
                    Notice::info("Analysis complete", "Your kolam analysis is ready!"),
                );
                Ok(result)
            }
            Err(e) => {
                self.fail(generation, "Analysis failed", &e);
                Err(e)
            }
        }
    }

    async fn poll(&self, generation: u64, id: &AnalysisId) -> KolamResult<AnalysisResult> {
        let mut checks = 0u32;
        loop {
            let status = self.backend.status(id).await?;
            checks += 1;
            self.update(generation, |s| s.record_status_check(checks));
            debug!(analysis_id = %id, %status, checks, "status check");

            match next_step(&self.policy, status, checks) {
                PollStep::Wait(delay) => tokio::time::sleep(delay).await,
                PollStep::FetchResults => return self.backend.results(id).await,
                PollStep::Fail(e) => return Err(e),
            }
        }
    }

    fn fail(&self, generation: u64, title: &str, error: &KolamError) {
        let message = error.to_string();
        warn!(generation, error = %message, "{}", title);
        if self.update(generation, |s| s.fail(message.clone())) {
            self.publish(Notice::error(title, message));
        }
    }
}
