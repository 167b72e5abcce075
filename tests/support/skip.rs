/// Skip a test unless live Drive credentials are configured.
///
/// Live tests need the published bundle (default or DRIVEPOST_BUNDLE_URL)
/// and its PIN in DRIVEPOST_TEST_PIN.
#[macro_export]
macro_rules! skip_without_live_drive {
    () => {
        if std::env::var("DRIVEPOST_TEST_PIN").is_err() {
            eprintln!("SKIPPED: DRIVEPOST_TEST_PIN not set");
            return;
        }
    };
}
