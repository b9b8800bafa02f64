mod util;

mod test_equivalence;
mod test_link_cut;
mod test_scenarios;
mod test_stt;
