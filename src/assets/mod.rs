/// Image decoding into engine-ready sources.
pub mod decode;
