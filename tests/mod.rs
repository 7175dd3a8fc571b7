mod flows;
mod support;
