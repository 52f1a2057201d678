//! DataProcessorCreator - Routes data through the selected processor

use std::io::Write;
use std::sync::Arc;

use crate::entities::Data;
use crate::factories::DataProcessor;

/// Holds at most one data processor and delegates to it.
#[derive(Default)]
pub struct DataProcessorCreator {
    processor: Option<Arc<dyn DataProcessor>>,
}

impl DataProcessorCreator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current processor.
    pub fn set_processor<P>(&mut self, processor: P)
    where
        P: DataProcessor + 'static,
    {
        self.set_shared_processor(Arc::new(processor));
    }

    pub fn set_shared_processor(&mut self, processor: Arc<dyn DataProcessor>) {
        tracing::debug!(
            processor = processor.factory_id(),
            "Data processor assigned"
        );
        self.processor = Some(processor);
    }

    pub fn has_processor(&self) -> bool {
        self.processor.is_some()
    }

    pub fn processor_id(&self) -> Option<&'static str> {
        self.processor.as_ref().map(|p| p.factory_id())
    }

    /// Run `data` through the current processor, writing its report to `out`.
    ///
    /// With no processor assigned nothing is written. The only error is the
    /// sink's own I/O error.
    pub fn process_data(&self, data: &Data, out: &mut dyn Write) -> std::io::Result<()> {
        let Some(processor) = &self.processor else {
            tracing::debug!(kind = %data.kind, "No data processor assigned, skipping");
            return Ok(());
        };
        tracing::trace!(processor = processor.factory_id(), kind = %data.kind, "Processing data");
        processor.process_data(data, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factories::{AudioDataProcessor, TextDataProcessor};

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "closed",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn without_processor_writes_nothing() {
        let creator = DataProcessorCreator::new();
        let mut out = Vec::new();
        creator
            .process_data(&Data::new("Audio", "Audio data"), &mut out)
            .expect("no-op never fails");
        assert!(out.is_empty());
        assert!(!creator.has_processor());
    }

    #[test]
    fn without_processor_never_touches_sink() {
        let creator = DataProcessorCreator::new();
        let data = Data::new("Text", "x");
        let result = creator.process_data(&data, &mut BrokenSink);
        assert!(result.is_ok());
    }

    #[test]
    fn audio_processor_reports_content() {
        let mut creator = DataProcessorCreator::new();
        creator.set_processor(AudioDataProcessor);

        let mut out = Vec::new();
        creator
            .process_data(&Data::new("Audio", "Audio data"), &mut out)
            .expect("write to vec");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Audio data processing: Audio data\n"
        );
    }

    #[test]
    fn reassigning_uses_only_the_new_processor() {
        let mut creator = DataProcessorCreator::new();
        creator.set_processor(AudioDataProcessor);
        creator.set_processor(TextDataProcessor);
        assert_eq!(creator.processor_id(), Some("text"));

        let mut out = Vec::new();
        creator
            .process_data(&Data::new("Text", "hello"), &mut out)
            .expect("write to vec");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "Text data processing: hello\n"
        );
    }

    #[test]
    fn sink_errors_propagate() {
        let mut creator = DataProcessorCreator::new();
        creator.set_processor(TextDataProcessor);
        let err = creator
            .process_data(&Data::new("Text", "hello"), &mut BrokenSink)
            .expect_err("sink is broken");
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
