use log::info;
use mirrorsync_core::{DirectoryPair, MirrorOptions, MirrorReporter, MirrorWalker};

pub struct Mirror;

impl Mirror {
    pub fn execute(pair: &DirectoryPair, options: MirrorOptions) -> anyhow::Result<()> {
        println!("{}", MirrorReporter::greeting(pair));
        if options.dry_run {
            info!("Dry run: no files will be written");
        }

        let result = MirrorWalker::new(options).mirror(pair)?;

        info!("Skipped {} up-to-date file(s)", result.files_skipped);
        println!("{}", MirrorReporter::generate_summary(&result));
        Ok(())
    }
}
