//! Greet Service - the entry-point use case.
//!
//! This service coordinates the whole run:
//! 1. Build the greeting record from the captured arguments
//! 2. Render it through the injected renderer
//! 3. Emit it as one line through the injected writer

use tracing::{debug, instrument};

use crate::{
    application::ports::{LineWriter, RecordRenderer},
    domain::{ArgumentList, GreetingRecord, greet},
    error::GreeterResult,
};

/// Main greeting service.
pub struct GreetService {
    renderer: Box<dyn RecordRenderer>,
    writer: Box<dyn LineWriter>,
}

impl GreetService {
    /// Create a new greet service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use greeter_core::application::{GreetService, ports::*};
    ///
    /// let service = GreetService::new(
    ///     renderer, // impl RecordRenderer
    ///     writer,   // impl LineWriter
    /// );
    /// ```
    pub fn new(renderer: Box<dyn RecordRenderer>, writer: Box<dyn LineWriter>) -> Self {
        Self { renderer, writer }
    }

    /// Build the record for `args`. Never fails.
    pub fn greet(&self, args: ArgumentList) -> GreetingRecord {
        greet(args)
    }

    /// Build and render the record for `args`.
    #[instrument(skip_all, fields(args = args.len()))]
    pub fn render(&self, args: ArgumentList) -> GreeterResult<String> {
        let record = self.greet(args);
        let text = self.renderer.render(&record)?;
        debug!(bytes = text.len(), "rendered greeting record");
        Ok(text)
    }

    /// Render the record for `args` and write it as a single line.
    #[instrument(skip_all, fields(program = args.program().unwrap_or_default()))]
    pub fn run(&self, args: ArgumentList) -> GreeterResult<()> {
        let text = self.render(args)?;
        self.writer.write_line(&text)?;
        debug!("greeting written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockLineWriter, MockRecordRenderer},
    };
    use crate::error::GreeterError;
    use mockall::predicate::eq;

    fn args(items: &[&str]) -> ArgumentList {
        ArgumentList::new(items.iter().copied())
    }

    #[test]
    fn greet_does_not_touch_ports() {
        let service = GreetService::new(
            Box::new(MockRecordRenderer::new()),
            Box::new(MockLineWriter::new()),
        );
        let record = service.greet(args(&["prog", "foo"]));
        assert_eq!(record.hello(), "World");
        assert_eq!(record.args().as_slice(), ["prog", "foo"]);
    }

    #[test]
    fn render_passes_the_record_to_the_renderer() {
        let mut renderer = MockRecordRenderer::new();
        renderer
            .expect_render()
            .withf(|record| record.args().as_slice() == ["prog", "foo", "bar"])
            .times(1)
            .returning(|_| Ok("rendered".into()));

        let service = GreetService::new(Box::new(renderer), Box::new(MockLineWriter::new()));
        assert_eq!(service.render(args(&["prog", "foo", "bar"])).unwrap(), "rendered");
    }

    #[test]
    fn run_writes_exactly_the_rendered_text() {
        let mut renderer = MockRecordRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|_| Ok("{\"Hello\":\"World\",\"args\":[]}".into()));

        let mut writer = MockLineWriter::new();
        writer
            .expect_write_line()
            .with(eq("{\"Hello\":\"World\",\"args\":[]}"))
            .times(1)
            .returning(|_| Ok(()));

        let service = GreetService::new(Box::new(renderer), Box::new(writer));
        service.run(ArgumentList::default()).unwrap();
    }

    #[test]
    fn run_skips_writing_when_rendering_fails() {
        let mut renderer = MockRecordRenderer::new();
        renderer.expect_render().returning(|_| {
            Err(ApplicationError::RenderingFailed {
                reason: "nope".into(),
            }
            .into())
        });

        let mut writer = MockLineWriter::new();
        writer.expect_write_line().never();

        let service = GreetService::new(Box::new(renderer), Box::new(writer));
        let err = service.run(args(&["prog"])).unwrap_err();
        assert!(matches!(
            err,
            GreeterError::Application(ApplicationError::RenderingFailed { .. })
        ));
    }

    #[test]
    fn run_propagates_write_failures() {
        let mut renderer = MockRecordRenderer::new();
        renderer.expect_render().returning(|_| Ok("x".into()));

        let mut writer = MockLineWriter::new();
        writer.expect_write_line().returning(|_| {
            Err(ApplicationError::WriteFailed {
                kind: std::io::ErrorKind::BrokenPipe,
                reason: "closed".into(),
            }
            .into())
        });

        let service = GreetService::new(Box::new(renderer), Box::new(writer));
        assert!(service.run(args(&["prog"])).unwrap_err().is_broken_pipe());
    }
}
