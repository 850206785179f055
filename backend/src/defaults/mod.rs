//! Built-in content written to an empty database at first boot.

use crate::models::{
    ApplicationCategory, CmsPage, HeaderMenuItem, HeroSlide, MainPageApplicationCard,
    MainPageContent, MainPageSettings, MainPageSlide, MenuTarget, PartnerBrand, PartnerCategory,
    Product, PublicSiteSettings, QuickLink, RouteMetaSetting, SiteContact, SiteContent,
    SolutionArea,
};

const FAVICON: &str = "/favicon.ico";
const HERO_IMAGE: &str = "/assets/legacy/images/hero/main_011498524747.jpg";
const COMPANY_BANNER: &str = "/assets/legacy/images/sub01_-hoe-sa-so-gae_011499426360.jpg";

/// Timestamp given to seeded CMS pages (Unix epoch).
pub const SEED_UPDATED_AT: &str = "1970-01-01T00:00:00.000000Z";

pub fn default_main_page_content() -> MainPageContent {
    let settings = MainPageSettings {
        hero_copy_top: "SHINHOTEK".into(),
        hero_copy_mid: "Innovation Light Changes the World".into(),
        hero_copy_bottom: "BEST Technology Solution".into(),
        hero_cta_label: "ABOUT SHINHOTEK".into(),
        hero_cta_href: "/company/ceo".into(),
        about_title: "ABOUT SHINHOTEK".into(),
        about_body_1: "광학은 앞으로 펼쳐질 미래 사회의 핵심 기술로서, 자율주행 자동차 등 광범위한 분야에 활용이 되고 있습니다.".into(),
        about_body_2: "신호텍은 고객사의 요구에 대한 광학 컨설팅을 통해 최적의 제품을 공급함으로써 국내의 레이저 산업 및 연구 분야의 발전에 앞장서고 있습니다.".into(),
        about_image_url: "/assets/legacy/images/section/main_part01_img01.jpg".into(),
        solution_title: "SH SOLUTION".into(),
        solution_body_1: "SHINHOTEK은 BPS(Business Partner System)을 기반으로 하여, 기성 광학 구성품 또는 모듈과 단품을 통합한 광학계 솔루션을 고객사에 제안합니다.".into(),
        solution_body_2: "가격과 미 경험에 의한 실패 확률을 줄여 최선의 효율을 추구하고, 향후 고객 application 및 사양에 맞는 맞춤화된 광학 솔루션을 제공하겠습니다.".into(),
        solution_step_image_1: "/assets/legacy/images/section/main_part02_img01.png".into(),
        solution_step_image_2: "/assets/legacy/images/section/main_part02_img02.png".into(),
        solution_step_image_3: "/assets/legacy/images/section/main_part02_img03.png".into(),
        footer_address: "주소 : 서울특별시 금천구 가산디지털 1로 19 대륭테크노타운 18차 1306호 (우편번호 08594) T 02-852-0533 F 02-853-0537".into(),
        footer_copyright: "Copyright 2017 SHINHOTEK. All Rights Reserved.".into(),
    };

    let slides = [
        ("slide-1", HERO_IMAGE),
        ("slide-2", "/assets/legacy/images/hero/main2_011498524728.jpg"),
        ("slide-3", "/assets/legacy/images/hero/main_011500862913.jpg"),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (id, image_url))| MainPageSlide {
        id: id.to_string(),
        image_url: image_url.to_string(),
        sort_order: index as u32,
    })
    .collect();

    let application_cards = [
        ("semiconductor", "Semiconductor", "main_part03_img011504858501.png"),
        ("solar-cell", "Solar cell", ""),
        ("aerospace", "Aerospace", "main_part03_img031504858618.png"),
        ("medical", "Medical", "main_part03_img041504858646.png"),
        ("automotive", "Automotive", "main_part03_img051504858663.png"),
        ("oled-display", "OLED display", "main_part03_img061504858679.png"),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (id, label, image))| MainPageApplicationCard {
        id: id.to_string(),
        label: label.to_string(),
        image_url: if image.is_empty() {
            String::new()
        } else {
            format!("/assets/legacy/images/application/{}", image)
        },
        link_url: "/product".to_string(),
        sort_order: index as u32,
    })
    .collect();

    MainPageContent {
        settings,
        slides,
        application_cards,
    }
}

fn route_meta(route: &str, title: &str, og_image: &str, sub_banner: Option<&str>) -> RouteMetaSetting {
    RouteMetaSetting {
        route: route.to_string(),
        title: title.to_string(),
        favicon_url: FAVICON.to_string(),
        og_image_url: og_image.to_string(),
        sub_banner_image_url: sub_banner.map(str::to_string),
    }
}

/// Built-in route metadata. The first entry is always the `/` catch-all.
pub fn default_route_meta() -> Vec<RouteMetaSetting> {
    vec![
        route_meta("/", "신호텍 주식회사", HERO_IMAGE, None),
        route_meta("/company", "신호텍 주식회사 회사소개", COMPANY_BANNER, Some(COMPANY_BANNER)),
        route_meta(
            "/partner",
            "신호텍 주식회사 파트너",
            "/assets/legacy/images/seul-ra-i-deu11573621207.jpg",
            Some("/assets/legacy/images/sub2_1_img011499513447.jpg"),
        ),
        route_meta(
            "/product",
            "신호텍 주식회사 제품",
            "/assets/legacy/images/hero/main2_011498524728.jpg",
            Some(COMPANY_BANNER),
        ),
        route_meta(
            "/inquiry",
            "신호텍 주식회사 제품문의",
            "/assets/legacy/images/sub04_-je-pum-mun-ui_011499678045.jpg",
            Some("/assets/legacy/images/sub04_-je-pum-mun-ui_011499678045.jpg"),
        ),
        route_meta(
            "/notice",
            "신호텍 주식회사 NOTICES",
            "/assets/legacy/images/sub05_-gong-ji-sa-hang_011499515027.jpg",
            Some("/assets/legacy/images/sub05_-gong-ji-sa-hang_011499515027.jpg"),
        ),
        route_meta("/asgasdg124af/admin", "신호텍 관리자", HERO_IMAGE, None),
    ]
}

fn leaf(id: &str, label: &str, href: &str) -> HeaderMenuItem {
    HeaderMenuItem {
        id: id.to_string(),
        label: label.to_string(),
        href: href.to_string(),
        target: None,
        children: None,
    }
}

fn external(id: &str, label: &str, href: &str) -> HeaderMenuItem {
    HeaderMenuItem {
        target: Some(MenuTarget::NewWindow),
        ..leaf(id, label, href)
    }
}

fn branch(id: &str, label: &str, href: &str, children: Vec<HeaderMenuItem>) -> HeaderMenuItem {
    HeaderMenuItem {
        children: Some(children),
        ..leaf(id, label, href)
    }
}

fn default_header_top_menu() -> Vec<HeaderMenuItem> {
    vec![
        branch(
            "be21e5fa",
            "회사소개",
            "/company/ceo",
            vec![
                leaf("54ddbaf0", "CEO 인사말", "/company/ceo"),
                leaf("a8efd0b7", "회사 비전", "/company/vision"),
                leaf("f4984283", "찾아오시는 길", "/company/location"),
            ],
        ),
        branch(
            "cd917f17",
            "파트너",
            "/partner/core",
            vec![leaf("sub2_1", "CORE PARTNER", "/partner/core")],
        ),
        leaf("db4958d7", "제품", "/product"),
        // The group node points at the section root; the quote form is a leaf below it.
        branch(
            "02708bea",
            "제품문의",
            "/inquiry",
            vec![
                leaf("inquiry", "견적요청", "/inquiry/quote"),
                leaf("testdemo", "Test 및 Demo", "/inquiry/test-demo"),
                leaf("menual", "자료실(매뉴얼)", "/inquiry/library"),
            ],
        ),
        branch(
            "ff6078f4",
            "공지사항",
            "/notice",
            vec![leaf("b13e0b14", "공지사항", "/notice")],
        ),
    ]
}

const CUSTOM_MEOPTA: &str = "http://shinhotek.hmandoo.co.kr/shop_contents/myboard_read.htm?load_type=&page_idx=0&tag_on=&h_search_c=0&h_search_v=&me_popup=&myboard_code=pro7_1&page_limit=10&idx=862531&page=1&category_idx=";
const CUSTOM_FEMTOPRINT: &str = "http://shinhotek.hmandoo.co.kr/shop_contents/myboard_read.htm?load_type=&page_idx=0&tag_on=&h_search_c=0&h_search_v=&me_popup=&myboard_code=pro7_2&page_limit=10&idx=86351&page=1&category_idx=";

fn default_header_product_mega() -> Vec<HeaderMenuItem> {
    vec![
        branch(
            "6b5eebd7",
            "Laser",
            "/product/laser",
            vec![
                leaf("aa49a34a", "Nanosecond", "/product/laser/nanosecond"),
                leaf("d9a8c320", "Picosecond/ Femtosecond", "/product/laser/picosecond-femtosecond"),
                leaf("b8f82ab3", "CO2", "/product/laser/co2"),
                leaf("336850dd", "Excimer", "/product/laser/excimer"),
                leaf("5ea7cbd3", "Diode laser", "/product/laser/diode-laser"),
            ],
        ),
        branch(
            "1f638fd0",
            "Optics",
            "/product/optics",
            vec![
                leaf("b451fed3", "모노클", "/product/optics/monocle"),
                leaf("23452345", "ULO Optics", "/product/optics/ulo-optics"),
                leaf("pro6_3", "그린광학", "/product/optics/green-optics"),
                leaf("pro6_4", "옌옵틱", "/product/optics/jenoptik"),
            ],
        ),
        branch(
            "1f969dbb",
            "Laser scanner",
            "/product/laser-scanner",
            vec![leaf("176a9c95", "Scanlab", "/product/laser-scanner/scanlab")],
        ),
        HeaderMenuItem {
            target: Some(MenuTarget::NewWindow),
            ..branch(
                "e158d94e",
                "Custom solution",
                CUSTOM_MEOPTA,
                vec![
                    external("28acbd82", "Meopta", CUSTOM_MEOPTA),
                    external("13300bde", "FEMTOPRINT®", CUSTOM_FEMTOPRINT),
                ],
            )
        },
        branch(
            "965c17c3",
            "Laser measurement",
            "/product/laser-measurement",
            vec![
                leaf("ee3098e3", "Laser point", "/product/laser-measurement/laser-point"),
                leaf("1b1dd59a", "Metrolux", "/product/laser-measurement/metrolux"),
                leaf("pro4_3", "SHINHOTEK", "/product/laser-measurement/shinhotek"),
            ],
        ),
        branch(
            "pro8_1",
            "Others",
            "/product/others",
            vec![leaf("36bdb97f", "Others", "/product/others/others")],
        ),
        branch(
            "6d145a0f",
            "Beam shaper",
            "/product/beam-shaper",
            vec![
                leaf("bf7f57c7", "Adloptica", "/product/beam-shaper/adloptica"),
                leaf("6bea92d7", "Power photonic", "/product/beam-shaper/power-photonic"),
                leaf("pro5_1", "Silios", "/product/beam-shaper/silios"),
            ],
        ),
    ]
}

pub fn default_public_site_settings() -> PublicSiteSettings {
    PublicSiteSettings {
        route_meta: default_route_meta(),
        header_top_menu: default_header_top_menu(),
        header_product_mega: default_header_product_mega(),
    }
}

pub fn default_site_content() -> SiteContent {
    SiteContent {
        hero_slides: default_hero_slides(),
        applications: default_applications(),
        products: default_products(),
        partners: default_partners(),
        solutions: default_solutions(),
        quick_links: vec![
            quick_link("KakaoTalk", "https://open.kakao.com/"),
            quick_link("WeChat", "https://www.wechat.com/"),
            quick_link("LinkedIn", "https://www.linkedin.com/company/shinhotek/"),
        ],
        process_steps: strings(&["Consulting", "Design", "Simulation", "Build", "Verification"]),
        ceo_message: "SHINHOTEK delivers process-focused optical engineering and supports execution from planning to validation.".to_string(),
        vision_items: strings(&[
            "Mission: Provide practical optical solutions",
            "Vision: Trusted partner in industrial optics",
            "Core Values: Precision, Reliability, Speed, Scalability",
        ]),
        contact: SiteContact {
            headquarter: "#1306 Daerung Techno Town-18, 19 Gasan digital 1-ro, Geumcheon-gu, Seoul, Korea".to_string(),
            rd_center: "#1307 Daerung Techno Town-18, 19 Gasan digital 1-ro, Geumcheon-gu, Seoul, Korea".to_string(),
            tel: "+82 (0)2 852-0533".to_string(),
            fax: "+82 (0)2 853-0537".to_string(),
            email: "sales@shinhotek.com".to_string(),
            website: "www.shinhotek.com".to_string(),
        },
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn quick_link(label: &str, url: &str) -> QuickLink {
    QuickLink {
        label: label.to_string(),
        url: url.to_string(),
    }
}

fn default_hero_slides() -> Vec<HeroSlide> {
    let slide = |id: &str, title: &str, subtitle: &str, cta_label: &str, cta_target: &str| HeroSlide {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        cta_label: cta_label.to_string(),
        cta_target: cta_target.to_string(),
    };

    vec![
        slide(
            "slide-1",
            "Innovation Light Changes the World",
            "Industrial process-ready laser and optics solutions by SHINHOTEK.",
            "About SHINHOTEK",
            "partners",
        ),
        slide(
            "slide-2",
            "BEST Technology Solution",
            "Find products quickly with integrated search and filter.",
            "Find Products",
            "products",
        ),
        slide(
            "slide-3",
            "From Consultation to Verification",
            "Consulting -> Design -> Simulation -> Build -> Verification",
            "Request Quote",
            "inquiry",
        ),
    ]
}

fn default_applications() -> Vec<ApplicationCategory> {
    let app = |id: &str, name: &str, summary: &str, process: &str, category: &str| {
        ApplicationCategory {
            id: id.to_string(),
            name: name.to_string(),
            summary: summary.to_string(),
            process: process.to_string(),
            recommended_product_category: category.to_string(),
        }
    };

    vec![
        app(
            "semiconductor",
            "Semiconductor",
            "Precision optical systems for semiconductor process quality.",
            "Process mapping with laser source + vision + beam control",
            "Laser, Metrology",
        ),
        app(
            "solar-cell",
            "Solar Cell",
            "Dedicated category replacing aerospace.",
            "Wavelength and output optimization for cell process lines",
            "Laser Scanner, Optics",
        ),
        app(
            "medical-bio",
            "Medical & Bio",
            "Micromachining and imaging precision for medical equipment.",
            "Bio-safe wavelength ranges with stable focusing",
            "Metrology, Beam Delivery",
        ),
        app(
            "automotive",
            "Automotive (Second Battery, LiDAR)",
            "Optical process support for EV battery and LiDAR lines.",
            "Battery tab/electrode workflows with LiDAR alignment design",
            "Laser, Shaping",
        ),
        app(
            "oled-display",
            "OLED Display",
            "Uniformity and precision support for display manufacturing.",
            "Beam shaping and metrology feedback loops",
            "Shaping, Optics",
        ),
        app(
            "aoi",
            "AOI (Automated Optical Inspection)",
            "Newly added AOI automation category.",
            "High-speed capture + lighting optimization + analysis workflow",
            "Vision, Metrology",
        ),
    ]
}

fn default_products() -> Vec<Product> {
    // (id, name, category, manufacturer, wavelength, power, interface, benefit)
    let rows: [(&str, &str, &str, &str, &str, f64, &str, &str); 10] = [
        ("laser-fiber-1", "Fiber Laser FL-1000", "Laser", "TRUMPF", "1064", 1000.0, "EtherCAT / RS-485", "High output stability and throughput"),
        ("laser-uv-1", "UV Laser UV-355", "Laser", "Coherent", "355", 20.0, "Ethernet / Digital I/O", "Micromachining quality"),
        ("scanner-2d-1", "2D Galvo Scanner GS-20", "Laser Scanner", "ScanLab", "355-1064", 500.0, "XY2-100 / EtherCAT", "Fast path control for laser machining"),
        ("metrology-1", "Metrology Vision MV-7", "Metrology", "Allied Vision", "450-850", 12.0, "GigE / USB3", "Precision metrology data capture"),
        ("metrology-2", "Inline Profiler IP-9", "Metrology", "Jenoptik", "532-1064", 30.0, "Ethernet / OPC-UA", "Inline quality feedback"),
        ("shaping-1", "Beam Shaping Module BS-4", "Shaping", "Altechna", "515-1064", 200.0, "Manual / Motorized", "Beam uniformity improvement"),
        ("optics-1", "Precision F-Theta Lens", "Optics", "WizOptics", "355 / 532 / 1064", 300.0, "Mechanical Mount", "Low distortion and focus stability"),
        ("beam-delivery-1", "Beam Delivery Module BD-3", "Beam Delivery", "3SAE", "780-1550", 40.0, "Fiber / FC Connector", "Reliable optical transfer path"),
        ("laser-green-1", "Green Laser GL-532", "Laser", "BMLaser", "532", 80.0, "RS-232 / Ethernet", "Good fit for reflective materials"),
        ("scanner-3d-1", "3D Dynamic Scanner DS-3", "Laser Scanner", "CoreRay", "1030-1080", 650.0, "EtherCAT", "3D contour trajectory control"),
    ];

    rows.iter()
        .map(
            |&(id, name, category, manufacturer, wavelength, power, interface, benefit)| Product {
                id: id.to_string(),
                name: name.to_string(),
                category: category.to_string(),
                manufacturer: manufacturer.to_string(),
                wavelength_nm: wavelength.to_string(),
                power_w: power,
                interface: interface.to_string(),
                benefit: benefit.to_string(),
                datasheet_url: "#".to_string(),
                cad_url: "#".to_string(),
            },
        )
        .collect()
}

fn default_partners() -> Vec<PartnerBrand> {
    use PartnerCategory::*;

    let rows = [
        ("Uniotech", Optics, "https://uniotech.kr/"),
        ("CoreRay", Vision, "https://www.coreray.kr/"),
        ("MJLINC", Optics, "https://www.mjlinc.com/"),
        ("SMTech", Laser, "http://www.smtech.co.kr/"),
        ("Lasernet", Laser, "http://www.lasernet.co.kr/shop/index.php"),
        ("Jinsung", Measurement, "https://jinsunginst.com/"),
        ("BMLaser Solution", Laser, "https://bmlaser.co.kr/"),
        ("Qbic Laser System", Laser, "http://qbiclaser.com/"),
        ("WizOptics", Optics, "http://www.wizoptics.com/"),
        ("DOMUN INC.", Measurement, "https://www.domun.co.kr/"),
        ("Enclony", Vision, "https://enclony.com/"),
        ("Altechna", Optics, "https://www.altechna.com/"),
        ("TRUMPF", Laser, "https://www.trumpf.com/"),
        ("Coherent", Laser, "https://www.coherent.com/"),
        ("3SAE Technologies", Optics, "https://3sae.com/"),
        ("Allied Vision", Vision, "https://www.alliedvision.com/"),
    ];

    rows.iter()
        .enumerate()
        .map(|(index, &(name, category, url))| PartnerBrand {
            id: format!("p-{}", index + 1),
            name: name.to_string(),
            category,
            url: url.to_string(),
        })
        .collect()
}

fn default_solutions() -> Vec<SolutionArea> {
    let area = |id: &str, title: &str, overview: &str, capabilities: &[&str]| SolutionArea {
        id: id.to_string(),
        title: title.to_string(),
        overview: overview.to_string(),
        capabilities: strings(capabilities),
    };

    vec![
        area(
            "optical-design",
            "Optical Design",
            "Optical system design for process-specific requirements.",
            &["Ray tracing with Zemax", "Tolerance analysis", "Prototype validation"],
        ),
        area(
            "mechanical-design",
            "Mechanical Design",
            "Mechanical design considering thermal and alignment issues.",
            &["Thermal-aware housing", "Precision alignment jig", "Manufacturable design"],
        ),
        area(
            "sw-design",
            "SW Design",
            "Control and analysis automation for equipment and process data.",
            &["Equipment communication", "Inspection logs", "Auto report pipeline"],
        ),
    ]
}

pub fn default_cms_pages() -> Vec<CmsPage> {
    let page = |slug: &str, title: &str, image_url: &str, markdown: &str| CmsPage {
        slug: slug.to_string(),
        title: title.to_string(),
        image_url: image_url.to_string(),
        markdown: markdown.to_string(),
        updated_at: SEED_UPDATED_AT.to_string(),
    };

    vec![
        page(
            "company-ceo",
            "대표자 인사말",
            "/assets/legacy-sync/sub1_1_img01.jpg",
            "![대표자 소개](/assets/legacy-sync/sub1_1_img01.jpg)\n\n### 4차 산업혁명의 시대를 맞아 차세대 광학솔루션 전문업체로서 거듭 나겠습니다.\n\n2007년 설립 이후 신호텍은 국내 광 관련 산업에 조그마한 초석이 되고자 노력해 왔습니다.\n\n지금까지 디스플레이, PCB, 반도체 및 의료기기 시장에서 쌓은 경험을 바탕으로 차세대 광학솔루션 전문업체로 성장하고자 과감한 도전과 투자에 대한 노력을 계속할 것을 약속 드립니다.",
        ),
        page(
            "company-vision",
            "회사 비전",
            "/assets/legacy-sync/sub1_2_img02.png",
            "### VISION\n\n신호텍의 VISION은 보다 **선도적으로**, 보다 **효율적인** 광학 솔루션을 제공하는 것입니다.\n\n### VISION 2030\n\n- 산업 맞춤형 광학 솔루션 고도화\n- 실행 중심 엔지니어링 역량 강화\n- 고객 성공 중심 파트너십 확대",
        ),
        page(
            "partner-core",
            "CORE PARTNER",
            "/assets/legacy/images/seul-ra-i-deu11573621207.jpg",
            "### CORE PARTNER\n\n핵심 파트너사와 함께 공정 문제를 해결하고, 검증 가능한 광학 솔루션을 제공합니다.\n\n![Core Partner](/assets/legacy/images/seul-ra-i-deu11573621207.jpg)",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_route_comes_first() {
        assert_eq!(default_route_meta()[0].route, "/");
    }

    #[test]
    fn test_default_main_page_is_densely_ordered() {
        let content = default_main_page_content();
        for (index, card) in content.application_cards.iter().enumerate() {
            assert_eq!(card.sort_order as usize, index);
        }
        assert_eq!(content.slides.len(), 3);
        assert_eq!(content.application_cards[1].image_url, "");
    }

    #[test]
    fn test_default_site_content_numbers_partners() {
        let content = default_site_content();
        assert_eq!(content.partners.len(), 16);
        assert_eq!(content.partners[0].id, "p-1");
        assert_eq!(content.partners[15].id, "p-16");
        assert_eq!(content.products.len(), 10);
        assert_eq!(content.process_steps.len(), 5);
    }

    #[test]
    fn test_default_cms_slugs_are_unique() {
        let pages = default_cms_pages();
        let mut slugs: Vec<&str> = pages.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), pages.len());
    }
}
