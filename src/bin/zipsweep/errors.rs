use error_chain::error_chain;
pub use error_chain::bail;

error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    links {
        Zipsweep(zipsweep::errors::Error, zipsweep::errors::ErrorKind);
    }
}
