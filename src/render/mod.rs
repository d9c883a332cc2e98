//! Drawing steps over the owned [`Canvas`](canvas::Canvas) and the pipeline that sequences them.

pub(crate) mod background;
pub(crate) mod canvas;
pub(crate) mod diagnostics;
pub(crate) mod element;
pub(crate) mod output;
pub(crate) mod pipeline;
pub(crate) mod text;
