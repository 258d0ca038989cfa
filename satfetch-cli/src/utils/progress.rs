use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use satfetch_engine::ProgressEvent;
use std::time::Duration;

fn fetch_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} {msg}\n[{elapsed_precise}] [{bar:40.green/white}] {pos}/{len}")
        .unwrap()
        .progress_chars("=> ")
}

#[derive(Clone)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    pub fn new(multi: MultiProgress, total: u64) -> Self {
        let bar = multi.add(ProgressBar::new(total));
        bar.set_style(fetch_style());
        bar.set_message("Downloading satellite images");
        bar.enable_steady_tick(Duration::from_millis(500));

        Self { bar: Some(bar) }
    }

    pub fn new_disabled() -> Self {
        Self { bar: None }
    }

    pub fn handle_event(&self, event: ProgressEvent) {
        let Some(bar) = &self.bar else {
            return;
        };

        match event {
            ProgressEvent::RecordSkipped { id, .. } => {
                bar.set_message(format!("Cached {id}"));
                bar.inc(1);
            }
            ProgressEvent::RecordDownloaded { id, .. } => {
                bar.set_message(format!("Downloaded {id}"));
                bar.inc(1);
            }
            ProgressEvent::RecordFailed { id, reason } => {
                bar.set_message(format!("Failed {id}: {reason}"));
                bar.inc(1);
            }
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message("Download complete");
        }
    }

    #[inline]
    #[allow(unused)]
    pub fn is_disabled(&self) -> bool {
        self.bar.is_none()
    }
}
