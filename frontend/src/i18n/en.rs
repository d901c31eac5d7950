pub const ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.services", "Services"),
    ("nav.transformations", "Transformations"),
    ("nav.feedback", "Feedback"),
    ("nav.packages", "Packages"),
    ("nav.faq", "FAQ"),
    ("nav.contact", "Contact"),
    ("nav.language", "العربية"),
    ("nav.menu", "Toggle menu"),
    ("nav.skip", "Skip to content"),
    ("language.changing", "Changing to English..."),

    // Hero
    ("landing.title.break", "Break"),
    ("landing.title.your", "Your"),
    ("landing.title.limits", "Limits"),
    ("landing.subtitle", "Science-based coaching that fits your life. Training, nutrition and follow-up built around your goal."),

    // About
    ("about.title", "About"),
    ("about.me", "Me"),
    ("about.description", "I'm Dr. Fares, a certified coach who has spent years helping busy students and professionals build strength, lose fat and fix their posture. Every plan I write is personal, practical and followed up closely."),
    ("about.qualification.1", "Certified personal trainer"),
    ("about.qualification.2", "Sports nutrition specialist"),
    ("about.qualification.3", "Corrective exercise and posture work"),
    ("about.qualification.4", "Hundreds of clients coached online"),

    // Services
    ("services.title", "Services"),
    ("services.subtitle", "Everything you need to reach your goal, in one place"),
    ("services.cta.looking", "Looking for the right plan?"),
    ("services.cta.view", "View Packages"),
    ("services.workout.title", "Workout Program"),
    ("services.workout.description", "A training plan built for your level, schedule and equipment."),
    ("services.workout.feature.1", "Progressive weekly structure"),
    ("services.workout.feature.2", "Exercise video guides"),
    ("services.workout.feature.3", "Adjustments based on your feedback"),
    ("services.diet.title", "Nutrition Plan"),
    ("services.diet.description", "Meals you actually enjoy, matched to your calories and macros."),
    ("services.diet.feature.1", "Flexible meal options"),
    ("services.diet.feature.2", "Calorie and macro targets"),
    ("services.diet.feature.3", "Supplement guidance"),
    ("services.tools.title", "Tracking Tools"),
    ("services.tools.description", "Simple tools that keep you accountable between check-ins."),
    ("services.tools.feature.1", "Progress tracking sheet"),
    ("services.tools.feature.2", "Weekly check-in form"),
    ("services.tools.feature.3", "Habit tracker"),
    ("services.tools.feature.4", "Direct messaging support"),

    // Transformations
    ("transformations.title", "Transformations"),
    ("transformations.subtitle", "Real clients, real results"),
    ("transformations.before", "Before"),
    ("transformations.after", "After"),
    ("transformations.front", "Front"),
    ("transformations.back", "Back"),
    ("transformations.duration", "Duration"),
    ("transformations.client.1.name", "Fares Mosaad"),
    ("transformations.client.1.role", "Engineering Student"),
    ("transformations.client.1.duration", "2 months"),
    ("transformations.client.1.achievement", "Fat Loss While Preserving Muscle"),
    ("transformations.client.1.story", "Most of his day is spent in lectures and studying, which led to rounded shoulders. He stayed committed, lost 8kg in 2 months and worked on his posture. He's still going, this isn't even 20% of his goal."),
    ("transformations.client.2.name", "Yousef Al-Nazer"),
    ("transformations.client.2.role", "Student & Working Professional"),
    ("transformations.client.2.duration", "3 months"),
    ("transformations.client.2.achievement", "Muscle Gain with Minimal Fat"),
    ("transformations.client.2.story", "With little free time between work and studies, he stuck to his diet and training and sent regular feedback. That dedication fixed his posture and built an impressive physique. He's still pushing toward his final goal."),

    // Testimonials
    ("feedback.title", "Client Feedback"),
    ("feedback.subtitle", "What my clients say about working together"),
    ("feedback.ariaLabel.gallery", "Client feedback gallery"),
    ("feedback.ariaLabel.viewImage", "View feedback image"),
    ("feedback.error.loadingImage", "Image could not be loaded"),
    ("feedback.close", "Close"),

    // Packages
    ("packages.title", "Packages"),
    ("packages.subtitle", "Pick the duration and tier that suit you"),
    ("packages.popular", "Most Popular"),
    ("packages.features", "What's included"),
    ("packages.tier", "Choose your tier"),
    ("packages.discount", "50% OFF"),
    ("packages.duration", "Duration"),
    ("packages.silver", "Silver"),
    ("packages.gold", "Gold"),
    ("packages.cta.silver", "Get Silver Package"),
    ("packages.cta.gold", "Get Gold Package"),
    ("packages.silver.benefit.1", "Weekly follow-up"),
    ("packages.silver.benefit.2", "Plan updates every two weeks"),
    ("packages.gold.benefit.1", "Daily follow-up"),
    ("packages.gold.benefit.2", "Plan updates every week"),
    ("packages.gold.benefit.3", "Priority replies on WhatsApp"),
    ("packages.feature.1", "Personalized workout program"),
    ("packages.feature.2", "Personalized nutrition plan"),
    ("packages.feature.3", "Exercise technique videos"),
    ("packages.feature.4", "Posture correction routine"),
    ("packages.feature.5", "Cardio plan"),
    ("packages.feature.6", "Supplement guidance"),
    ("packages.feature.7", "Body measurements tracking"),
    ("packages.feature.8", "Progress photo reviews"),
    ("packages.feature.9", "Grocery list"),
    ("packages.feature.10", "WhatsApp support"),
    ("packages.testing.title", "Testing Package"),
    ("packages.testing.duration", "1 month"),
    ("packages.testing.suitableFor", "Suitable if you want to try the coaching before committing."),
    ("packages.development.title", "Development Package"),
    ("packages.development.duration", "2 months"),
    ("packages.development.suitableFor", "Suitable for visible results and building lasting habits."),
    ("packages.journey.title", "Journey Package"),
    ("packages.journey.duration", "3 months"),
    ("packages.journey.suitableFor", "Suitable for a complete transformation with long-term support."),
    ("packages.egp", "EGP"),
    ("packages.usd", "USD"),
    ("packages.sar", "SAR"),
    ("packages.aed", "AED"),
    ("packages.kwd", "KWD"),
    ("packages.qar", "QAR"),

    // FAQ
    ("faq.title", "Frequently Asked Questions"),
    ("faq.subtitle", "Everything you need to know before you start"),
    ("faq.q1", "Who can join the program?"),
    ("faq.a1", "Anyone who wants to reach their goal and make their life better."),
    ("faq.q2", "Do you coach women?"),
    ("faq.a2", "Yes, with follow-up that doesn't require photos. If you prefer, communication can go through your father or brother."),
    ("faq.q3", "How long until I receive my program?"),
    ("faq.a3", "Between one and three days at most."),
    ("faq.q4", "What is the refund policy?"),
    ("faq.a4", "You get a full refund if no plans have been delivered yet. Once the program is delivered, refunds are not possible."),
    ("faq.q5", "Is there follow-up and check-ins?"),
    ("faq.a5", "Of course. The silver tier has weekly follow-up and the gold tier has daily follow-up."),
    ("faq.q6", "When does the subscription start?"),
    ("faq.a6", "As soon as you receive your plans."),
    ("faq.q7", "Do I have to share my transformation?"),
    ("faq.a7", "It's preferred, but if you'd rather not, that's your privacy and it will be respected."),

    // Footer
    ("footer.tagline", "Coaching that fits your life."),
    ("footer.quicklinks", "Quick Links"),
    ("footer.legal", "Legal"),
    ("footer.connect", "Connect"),
    ("footer.privacy", "Privacy Policy"),
    ("footer.terms", "Terms of Service"),
    ("footer.cookies", "Cookie Policy"),
    ("footer.rights", "All rights reserved."),

    // WhatsApp templates
    ("whatsapp.general", "Hi Dr. Fares, I'd like to know more about your coaching."),
    ("whatsapp.package", "Hi Dr. Fares, I'm interested in the {0} - {1}"),

    // Not found
    ("notfound.title", "404"),
    ("notfound.subtitle", "Page not found"),
    ("notfound.description", "The page you are looking for doesn't exist or was moved."),
    ("notfound.backhome", "Back to home"),

    ("image.unavailable", "Image unavailable"),
];
