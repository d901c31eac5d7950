pub const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "الرئيسية"),
    ("nav.about", "من أنا"),
    ("nav.services", "الخدمات"),
    ("nav.transformations", "التحولات"),
    ("nav.feedback", "آراء العملاء"),
    ("nav.packages", "الباقات"),
    ("nav.faq", "الأسئلة الشائعة"),
    ("nav.contact", "تواصل معي"),
    ("nav.language", "English"),
    ("nav.menu", "فتح القائمة"),
    ("nav.skip", "تخطي إلى المحتوى"),
    ("language.changing", "جاري التغيير للعربية..."),

    // Hero
    ("landing.title.break", "اكسر"),
    ("landing.title.your", "حدودك"),
    ("landing.title.limits", "وابدأ التغيير"),
    ("landing.subtitle", "تدريب مبني على العلم ومناسب لحياتك. تمرين وتغذية ومتابعة مصممة حول هدفك."),

    // About
    ("about.title", "من"),
    ("about.me", "أنا"),
    ("about.description", "أنا د. فارس، مدرب معتمد ساعدت طلاب وموظفين كتير مشغولين إنهم يبنوا قوة وينزلوا دهون ويصلحوا قوامهم. كل برنامج بكتبه شخصي وعملي ومتابع عن قرب."),
    ("about.qualification.1", "مدرب شخصي معتمد"),
    ("about.qualification.2", "أخصائي تغذية رياضية"),
    ("about.qualification.3", "تمارين تصحيحية وتعديل القوام"),
    ("about.qualification.4", "مئات العملاء أونلاين"),

    // Services
    ("services.title", "الخدمات"),
    ("services.subtitle", "كل اللي محتاجه عشان توصل لهدفك في مكان واحد"),
    ("services.cta.looking", "بتدور على الخطة المناسبة؟"),
    ("services.cta.view", "شوف الباقات"),
    ("services.workout.title", "برنامج التمرين"),
    ("services.workout.description", "خطة تمرين مبنية على مستواك ووقتك والأدوات المتاحة ليك."),
    ("services.workout.feature.1", "تدرج أسبوعي في الأحمال"),
    ("services.workout.feature.2", "فيديوهات شرح للتمارين"),
    ("services.workout.feature.3", "تعديلات حسب ملاحظاتك"),
    ("services.diet.title", "النظام الغذائي"),
    ("services.diet.description", "وجبات بتحبها فعلاً ومظبوطة على سعراتك وماكروزك."),
    ("services.diet.feature.1", "اختيارات وجبات مرنة"),
    ("services.diet.feature.2", "أهداف السعرات والماكروز"),
    ("services.diet.feature.3", "إرشادات المكملات"),
    ("services.tools.title", "أدوات المتابعة"),
    ("services.tools.description", "أدوات بسيطة بتخليك ملتزم بين كل متابعة والتانية."),
    ("services.tools.feature.1", "شيت متابعة التقدم"),
    ("services.tools.feature.2", "فورم المتابعة الأسبوعية"),
    ("services.tools.feature.3", "متتبع العادات"),
    ("services.tools.feature.4", "دعم مباشر بالرسائل"),

    // Transformations
    ("transformations.title", "التحولات"),
    ("transformations.subtitle", "عملاء حقيقيين ونتائج حقيقية"),
    ("transformations.before", "قبل"),
    ("transformations.after", "بعد"),
    ("transformations.front", "أمامي"),
    ("transformations.back", "خلفي"),
    ("transformations.duration", "المدة"),
    ("transformations.client.1.name", "فارس مسعد"),
    ("transformations.client.1.role", "طالب هندسة"),
    ("transformations.client.1.duration", "شهرين"),
    ("transformations.client.1.achievement", "خسارة دهون مع الحفاظ على العضل"),
    ("transformations.client.1.story", "أغلب يومه بين المحاضرات والمذاكرة وده سبب له تقوس في الكتاف. التزم ونزل ٨ كيلو في شهرين واشتغل على قوامه. ولسه مكمل لأن ده مش حتى ٢٠٪ من هدفه."),
    ("transformations.client.2.name", "يوسف الناظر"),
    ("transformations.client.2.role", "طالب وموظف"),
    ("transformations.client.2.duration", "٣ شهور"),
    ("transformations.client.2.achievement", "زيادة عضل بأقل دهون"),
    ("transformations.client.2.story", "رغم ضيق وقته بين الشغل والدراسة، التزم بالأكل والتمرين وكان بيبعت متابعة منتظمة. الالتزام ده صلح قوامه وبنى جسم مميز. ولسه مكمل لحد ما يوصل لهدفه."),

    // Testimonials
    ("feedback.title", "آراء العملاء"),
    ("feedback.subtitle", "عملائي بيقولوا إيه عن الشغل معايا"),
    ("feedback.ariaLabel.gallery", "معرض آراء العملاء"),
    ("feedback.ariaLabel.viewImage", "عرض صورة الرأي"),
    ("feedback.error.loadingImage", "تعذر تحميل الصورة"),
    ("feedback.close", "إغلاق"),

    // Packages
    ("packages.title", "الباقات"),
    ("packages.subtitle", "اختار المدة والمستوى المناسبين ليك"),
    ("packages.popular", "الأكثر طلباً"),
    ("packages.features", "الباقة بتشمل"),
    ("packages.tier", "اختار المستوى"),
    ("packages.discount", "خصم ٥٠٪"),
    ("packages.duration", "المدة"),
    ("packages.silver", "الفضية"),
    ("packages.gold", "الذهبية"),
    ("packages.cta.silver", "احصل على الباقة الفضية"),
    ("packages.cta.gold", "احصل على الباقة الذهبية"),
    ("packages.silver.benefit.1", "متابعة أسبوعية"),
    ("packages.silver.benefit.2", "تعديل البرنامج كل أسبوعين"),
    ("packages.gold.benefit.1", "متابعة يومية"),
    ("packages.gold.benefit.2", "تعديل البرنامج كل أسبوع"),
    ("packages.gold.benefit.3", "أولوية في الرد على واتساب"),
    ("packages.feature.1", "برنامج تمرين مخصص"),
    ("packages.feature.2", "نظام غذائي مخصص"),
    ("packages.feature.3", "فيديوهات شرح أداء التمارين"),
    ("packages.feature.4", "روتين تصحيح القوام"),
    ("packages.feature.5", "خطة كارديو"),
    ("packages.feature.6", "إرشادات المكملات"),
    ("packages.feature.7", "متابعة قياسات الجسم"),
    ("packages.feature.8", "مراجعة صور التقدم"),
    ("packages.feature.9", "قائمة مشتريات"),
    ("packages.feature.10", "دعم على واتساب"),
    ("packages.testing.title", "باقة التجربة"),
    ("packages.testing.duration", "شهر"),
    ("packages.testing.suitableFor", "مناسبة لو عايز تجرب التدريب قبل ما تلتزم."),
    ("packages.development.title", "باقة التطوير"),
    ("packages.development.duration", "شهرين"),
    ("packages.development.suitableFor", "مناسبة لنتايج واضحة وبناء عادات تدوم."),
    ("packages.journey.title", "باقة الرحلة"),
    ("packages.journey.duration", "٣ شهور"),
    ("packages.journey.suitableFor", "مناسبة لتحول كامل مع دعم طويل المدى."),
    ("packages.egp", "جنيه"),
    ("packages.usd", "دولار"),
    ("packages.sar", "ريال"),
    ("packages.aed", "درهم"),
    ("packages.kwd", "دينار كويتي"),
    ("packages.qar", "ريال قطري"),

    // FAQ
    ("faq.title", "الأسئلة الشائعة"),
    ("faq.subtitle", "كل اللي محتاج تعرفه قبل ما تبدأ"),
    ("faq.q1", "مين يقدر ينضم للبرنامج؟"),
    ("faq.a1", "اي حد حابب يوصل لهدفه ويخلي حياته افضل"),
    ("faq.q2", "هل بتمرن بنات؟"),
    ("faq.a2", "ايوا بس المتابعه بدون صور ولو حبيتي ممكن يبقي التواصل من خلال الوالد او الأخ"),
    ("faq.q3", "بستلم البرنامج فى قد اية؟"),
    ("faq.a3", "من يوم ل ٣ أيام كحد اقصي"),
    ("faq.q4", "إيه سياسة الاسترجاع؟"),
    ("faq.a4", "يمكنك استرداد كامل مبلغ الاشتراك اذا لم يتم استلام اى خطط، لكن اذا تم استلام البرنامج لا يسمح باسترداد المبلغ"),
    ("faq.q5", "هل يوجد متابعة و فحوصات؟"),
    ("faq.a5", "طبعا في الباقه الفضيه بتابعك كل أسبوع وفالباقه الذهبيه متابعه يوميه"),
    ("faq.q6", "الاشتراك بيبدأ امتى؟"),
    ("faq.a6", "اول ما يوصلك جداول الشغل"),
    ("faq.q7", "هل لازم أنشر تحول العميل؟"),
    ("faq.a7", "يفضل بس لو العميل مش حابب فا دي خصوصيه وأنا مقدرش أتعداها"),

    // Footer
    ("footer.tagline", "تدريب مناسب لحياتك."),
    ("footer.quicklinks", "روابط سريعة"),
    ("footer.legal", "قانوني"),
    ("footer.connect", "تواصل"),
    ("footer.privacy", "سياسة الخصوصية"),
    ("footer.terms", "شروط الخدمة"),
    ("footer.cookies", "سياسة ملفات الارتباط"),
    ("footer.rights", "جميع الحقوق محفوظة."),

    // WhatsApp templates
    ("whatsapp.general", "أهلاً د. فارس، حابب أعرف أكتر عن التدريب."),
    ("whatsapp.package", "أهلاً د. فارس، أنا مهتم بـ {0} - {1}"),

    // Not found
    ("notfound.title", "404"),
    ("notfound.subtitle", "الصفحة غير موجودة"),
    ("notfound.description", "الصفحة اللي بتدور عليها مش موجودة أو اتنقلت."),
    ("notfound.backhome", "الرجوع للرئيسية"),

    ("image.unavailable", "الصورة غير متاحة"),
];
