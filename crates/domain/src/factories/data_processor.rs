//! Data processors: Text, Audio, Video.

use std::io::Write;

use super::DataProcessor;
use crate::entities::Data;

fn report(out: &mut dyn Write, label: &str, data: &Data) -> std::io::Result<()> {
    writeln!(out, "{label} data processing: {}", data.content)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextDataProcessor;

impl DataProcessor for TextDataProcessor {
    fn factory_id(&self) -> &'static str {
        "text"
    }

    fn process_data(&self, data: &Data, out: &mut dyn Write) -> std::io::Result<()> {
        report(out, "Text", data)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioDataProcessor;

impl DataProcessor for AudioDataProcessor {
    fn factory_id(&self) -> &'static str {
        "audio"
    }

    fn process_data(&self, data: &Data, out: &mut dyn Write) -> std::io::Result<()> {
        report(out, "Audio", data)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoDataProcessor;

impl DataProcessor for VideoDataProcessor {
    fn factory_id(&self) -> &'static str {
        "video"
    }

    fn process_data(&self, data: &Data, out: &mut dyn Write) -> std::io::Result<()> {
        report(out, "Video", data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(processor: &dyn DataProcessor, data: &Data) -> String {
        let mut out = Vec::new();
        processor
            .process_data(data, &mut out)
            .expect("write to vec");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn audio_writes_one_line() {
        let data = Data::new("Audio", "Audio data");
        assert_eq!(
            run(&AudioDataProcessor, &data),
            "Audio data processing: Audio data\n"
        );
    }

    #[test]
    fn label_comes_from_processor_not_data() {
        // A text processor handed audio data still reports as text.
        let data = Data::new("Audio", "chirp");
        assert_eq!(
            run(&TextDataProcessor, &data),
            "Text data processing: chirp\n"
        );
        assert_eq!(
            run(&VideoDataProcessor, &data),
            "Video data processing: chirp\n"
        );
    }

    #[test]
    fn data_is_left_untouched() {
        let data = Data::new("Video", "frames");
        let before = data.clone();
        run(&VideoDataProcessor, &data);
        assert_eq!(data, before);
    }
}
