use whither::{parse_checks, process_checks, Report, ReportOptions, RuleSet, Settings};

fn main() {
    let rules = RuleSet::from_text(
        "redirect 301 /old /new\n\
         redirectmatch 301 ^/blog/(.*)$ /posts/$1\n\
         redirect 301 /a /b\n\
         redirect 301 /b /a\n\
         redirect 410 /retired\n",
    )
    .expect("failed to parse rules");

    println!("{rules}");

    let checks = parse_checks(
        "/old 301 /new\n\
         /blog/hello 301 /posts/hello\n\
         /a 301 /b\n\
         /home 200\n",
    )
    .expect("failed to parse checks");

    let results = process_checks(&rules, &checks, &Settings::new().with_max_hops(5));
    let report = Report::new(&results, ReportOptions::default());

    println!("{results}");
    print!("{report}");
    println!("{} failures", report.failures());
}
