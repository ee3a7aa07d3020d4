mod footer;

pub(crate) use footer::Footer;
